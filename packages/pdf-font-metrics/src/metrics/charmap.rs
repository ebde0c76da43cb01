//! Character map selection and symbol font detection

use crate::constants::SYMBOL_CHARMAP_OFFSET;
use crate::engine::{CharmapEncoding, FontFace};

/// Try to activate a Unicode map; fonts without one keep the engine default
pub(super) fn select_unicode<F: FontFace>(face: &mut F) -> bool {
    let selected = face.select_charmap(CharmapEncoding::Unicode);
    if !selected {
        log::warn!("Font has no Unicode character map, using the engine default");
    }
    selected
}

/// Activate the first Microsoft Symbol map, in engine order
///
/// Returns `true` when one was found. Later maps are not inspected.
pub(super) fn detect_symbol<F: FontFace>(face: &mut F) -> bool {
    let Some(charmap) = face
        .charmaps()
        .into_iter()
        .find(|charmap| charmap.encoding == CharmapEncoding::MsSymbol)
    else {
        return false;
    };

    if !face.set_charmap(charmap.index) {
        log::warn!("Engine refused to activate symbol charmap {}", charmap.index);
    }
    log::debug!(
        "Detected symbol font (charmap {}, platform {}, encoding {})",
        charmap.index,
        charmap.platform_id,
        charmap.encoding_id
    );
    true
}

/// Code to query in the active map for `code`
#[inline]
pub(super) fn symbol_code(code: u32, symbol: bool) -> u32 {
    if symbol {
        code | SYMBOL_CHARMAP_OFFSET
    } else {
        code
    }
}
