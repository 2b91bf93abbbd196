// Engine overrides read from `data-*` attributes on the mount element.

use super::constants::*;
use anyhow::Context;
use cursor_core::CursorParams;
use std::str::FromStr;

fn parse_attr<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => {
            let v = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("{}=\"{}\"", name, raw))?;
            Ok(Some(v))
        }
        None => Ok(None),
    }
}

/// Builds validated params from defaults plus whatever attributes `lookup` finds.
pub fn params_from_attrs(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<CursorParams> {
    let mut params = CursorParams::default();
    if let Some(v) = parse_attr(&lookup, ATTR_TRAIL_CAPACITY)? {
        params.trail_capacity = v;
    }
    if let Some(v) = parse_attr(&lookup, ATTR_EMIT_DISTANCE)? {
        params.emit_distance_px = v;
    }
    if let Some(v) = parse_attr(&lookup, ATTR_IDLE_HIDE_MS)? {
        params.idle_hide_ms = v;
    }
    if let Some(v) = parse_attr(&lookup, ATTR_SPRING_STIFFNESS)? {
        params.spring.stiffness = v;
    }
    params.validate()?;
    Ok(params)
}
