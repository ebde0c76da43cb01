//! Minimal TrueType writer
//!
//! Emits `head`, `hhea`, `maxp`, `hmtx` and format 12 `cmap` subtables, plus
//! optional `post`, `OS/2` and `name` tables. No outlines.

pub struct SfntBuilder {
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
    pub bbox: [i16; 4],
    /// Advance per glyph id; glyph 0 is .notdef
    pub advances: Vec<u16>,
    pub unicode_map: Vec<(u32, u16)>,
    pub symbol_map: Vec<(u32, u16)>,
    /// `(position, thickness)` written to `post`
    pub underline: Option<(i16, i16)>,
    /// `(position, size)` written to `OS/2`
    pub strikeout: Option<(i16, i16)>,
    pub postscript_name: Option<String>,
}

impl SfntBuilder {
    pub fn new(units_per_em: u16, num_glyphs: u16) -> Self {
        Self {
            units_per_em,
            ascender: 800,
            descender: -200,
            line_gap: 0,
            bbox: [0, -200, 1000, 800],
            advances: vec![500; usize::from(num_glyphs)],
            unicode_map: Vec::new(),
            symbol_map: Vec::new(),
            underline: None,
            strikeout: None,
            postscript_name: None,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
            (*b"head", self.head()),
            (*b"hhea", self.hhea()),
            (*b"maxp", self.maxp()),
            (*b"hmtx", self.hmtx()),
            (*b"cmap", self.cmap()),
        ];
        if let Some((position, thickness)) = self.underline {
            tables.push((*b"post", Self::post(position, thickness)));
        }
        if let Some((position, size)) = self.strikeout {
            tables.push((*b"OS/2", Self::os2(position, size)));
        }
        if let Some(name) = &self.postscript_name {
            tables.push((*b"name", Self::name(name)));
        }
        tables.sort_by(|a, b| a.0.cmp(&b.0));

        let num_tables = tables.len() as u16;
        let entry_selector = 15 - num_tables.leading_zeros() as u16;
        let search_range = (1u16 << entry_selector) * 16;

        let mut out = Vec::new();
        put_u32(&mut out, 0x0001_0000);
        put_u16(&mut out, num_tables);
        put_u16(&mut out, search_range);
        put_u16(&mut out, entry_selector);
        put_u16(&mut out, num_tables * 16 - search_range);

        let mut offset = 12 + 16 * tables.len();
        for (tag, data) in &tables {
            out.extend_from_slice(tag);
            put_u32(&mut out, 0);
            put_u32(&mut out, offset as u32);
            put_u32(&mut out, data.len() as u32);
            offset += padded(data.len());
        }
        for (_, data) in &tables {
            out.extend_from_slice(data);
            out.resize(padded(out.len()), 0);
        }
        out
    }

    fn head(&self) -> Vec<u8> {
        let mut t = Vec::new();
        put_u32(&mut t, 0x0001_0000);
        put_u32(&mut t, 0x0001_0000);
        put_u32(&mut t, 0);
        put_u32(&mut t, 0x5F0F_3CF5);
        put_u16(&mut t, 0x000B);
        put_u16(&mut t, self.units_per_em);
        t.extend_from_slice(&[0; 16]);
        for value in self.bbox {
            put_i16(&mut t, value);
        }
        put_u16(&mut t, 0);
        put_u16(&mut t, 8);
        put_i16(&mut t, 2);
        put_i16(&mut t, 0);
        put_i16(&mut t, 0);
        debug_assert_eq!(t.len(), 54);
        t
    }

    fn hhea(&self) -> Vec<u8> {
        let mut t = Vec::new();
        put_u32(&mut t, 0x0001_0000);
        put_i16(&mut t, self.ascender);
        put_i16(&mut t, self.descender);
        put_i16(&mut t, self.line_gap);
        put_u16(&mut t, self.advances.iter().copied().max().unwrap_or(0));
        put_i16(&mut t, 0);
        put_i16(&mut t, 0);
        put_i16(&mut t, self.bbox[2]);
        put_i16(&mut t, 1);
        put_i16(&mut t, 0);
        put_i16(&mut t, 0);
        t.extend_from_slice(&[0; 8]);
        put_i16(&mut t, 0);
        put_u16(&mut t, self.advances.len() as u16);
        debug_assert_eq!(t.len(), 36);
        t
    }

    fn maxp(&self) -> Vec<u8> {
        let mut t = Vec::new();
        put_u32(&mut t, 0x0000_5000);
        put_u16(&mut t, self.advances.len() as u16);
        t
    }

    fn hmtx(&self) -> Vec<u8> {
        let mut t = Vec::new();
        for &advance in &self.advances {
            put_u16(&mut t, advance);
            put_i16(&mut t, 0);
        }
        t
    }

    fn cmap(&self) -> Vec<u8> {
        let mut subtables = Vec::new();
        if !self.symbol_map.is_empty() {
            subtables.push((3u16, 0u16, Self::format12(&self.symbol_map)));
        }
        if !self.unicode_map.is_empty() {
            subtables.push((3, 10, Self::format12(&self.unicode_map)));
        }

        let mut t = Vec::new();
        put_u16(&mut t, 0);
        put_u16(&mut t, subtables.len() as u16);
        let mut offset = 4 + 8 * subtables.len();
        for (platform, encoding, data) in &subtables {
            put_u16(&mut t, *platform);
            put_u16(&mut t, *encoding);
            put_u32(&mut t, offset as u32);
            offset += data.len();
        }
        for (_, _, data) in &subtables {
            t.extend_from_slice(data);
        }
        t
    }

    fn format12(map: &[(u32, u16)]) -> Vec<u8> {
        let mut groups = map.to_vec();
        groups.sort();

        let mut t = Vec::new();
        put_u16(&mut t, 12);
        put_u16(&mut t, 0);
        put_u32(&mut t, 16 + 12 * groups.len() as u32);
        put_u32(&mut t, 0);
        put_u32(&mut t, groups.len() as u32);
        for (code, glyph) in groups {
            put_u32(&mut t, code);
            put_u32(&mut t, code);
            put_u32(&mut t, u32::from(glyph));
        }
        t
    }

    fn post(position: i16, thickness: i16) -> Vec<u8> {
        let mut t = Vec::new();
        put_u32(&mut t, 0x0003_0000);
        put_u32(&mut t, 0);
        put_i16(&mut t, position);
        put_i16(&mut t, thickness);
        t.extend_from_slice(&[0; 20]);
        debug_assert_eq!(t.len(), 32);
        t
    }

    fn os2(strikeout_position: i16, strikeout_size: i16) -> Vec<u8> {
        let mut t = Vec::new();
        put_u16(&mut t, 0); // version
        put_i16(&mut t, 500); // xAvgCharWidth
        put_u16(&mut t, 400); // usWeightClass
        put_u16(&mut t, 5); // usWidthClass
        put_u16(&mut t, 0); // fsType
        t.extend_from_slice(&[0; 16]); // sub/superscript metrics
        put_i16(&mut t, strikeout_size);
        put_i16(&mut t, strikeout_position);
        t.resize(78, 0);
        t
    }

    fn name(postscript_name: &str) -> Vec<u8> {
        let encoded: Vec<u8> = postscript_name
            .encode_utf16()
            .flat_map(|unit| unit.to_be_bytes())
            .collect();

        let mut t = Vec::new();
        put_u16(&mut t, 0);
        put_u16(&mut t, 1);
        put_u16(&mut t, 6 + 12);
        put_u16(&mut t, 3);
        put_u16(&mut t, 1);
        put_u16(&mut t, 0x0409);
        put_u16(&mut t, 6);
        put_u16(&mut t, encoded.len() as u16);
        put_u16(&mut t, 0);
        t.extend_from_slice(&encoded);
        t
    }
}

fn padded(len: usize) -> usize {
    (len + 3) & !3
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn put_i16(out: &mut Vec<u8>, value: i16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}
