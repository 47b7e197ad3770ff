use super::{js_error, window, EffectError};

/// Whether the operating system asks for reduced motion.
pub fn prefers_reduced_motion() -> Result<bool, EffectError> {
    let query = window()?
        .match_media("(prefers-reduced-motion: reduce)")
        .map_err(js_error)?;
    Ok(query.map(|list| list.matches()).unwrap_or(false))
}
