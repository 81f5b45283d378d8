use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::{
    animation::anim::Keyframes,
    foundation::core::Point,
    foundation::math::fmt_num,
};

const COORD_DECIMALS: usize = 2;
const TIME_DECIMALS: usize = 4;

pub(crate) fn num(v: f64) -> String {
    fmt_num(v, COORD_DECIMALS)
}

pub(crate) fn point(p: Point) -> String {
    format!("{},{}", num(p.x), num(p.y))
}

/// Escape text for element content and attribute values.
pub(crate) fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn key_times<T>(track: &Keyframes<T>) -> String
where
    T: crate::animation::anim::Lerp + Clone,
{
    track
        .times()
        .map(|t| fmt_num(t, TIME_DECIMALS))
        .collect::<Vec<_>>()
        .join(";")
}

/// `<animate>` for a scalar attribute driven by a cycle track.
pub(crate) fn animate(
    out: &mut String,
    attr: &str,
    track: &Keyframes<f64>,
    dur_secs: f64,
) -> fmt::Result {
    let values = track
        .values()
        .map(|v| fmt_num(*v, 3))
        .collect::<Vec<_>>()
        .join(";");
    write!(
        out,
        r#"<animate attributeName="{attr}" values="{values}" keyTimes="{}" dur="{}s" repeatCount="indefinite"/>"#,
        key_times(track),
        num(dur_secs),
    )
}

/// `<animateTransform type="translate">` driven by a cycle track of positions.
pub(crate) fn animate_translate(
    out: &mut String,
    track: &Keyframes<Point>,
    dur_secs: f64,
) -> fmt::Result {
    let values = track
        .values()
        .map(|p| point(*p))
        .collect::<Vec<_>>()
        .join(";");
    write!(
        out,
        r#"<animateTransform attributeName="transform" type="translate" values="{values}" keyTimes="{}" dur="{}s" repeatCount="indefinite"/>"#,
        key_times(track),
        num(dur_secs),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
