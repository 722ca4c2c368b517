use crate::foundation::color::Color;

/// Composites `src` onto the packed pixel `dst` in place (straight alpha).
///
/// When `dst` has any alpha, each of R/G/B becomes
/// `(dst * (255 - a_src) + src * a_src) / 255`; a fully transparent `dst`
/// takes the source channels as-is. Alpha accumulates: `min(a_dst + a_src, 255)`.
/// A fully transparent source leaves `dst` untouched.
///
/// Every rasterizer writes pixels through this function.
#[inline]
pub fn blend_color(dst: &mut u32, src: Color) {
    let a2 = u32::from(src.a());
    if a2 == 0 {
        return;
    }
    let d = Color(*dst);
    let a1 = u32::from(d.a());

    let mix = |c1: u8, c2: u8| -> u8 {
        if a1 > 0 {
            let v = (u32::from(c1) * (255 - a2) + u32::from(c2) * a2) / 255;
            v.min(255) as u8
        } else {
            c2
        }
    };

    let r = mix(d.r(), src.r());
    let g = mix(d.g(), src.g());
    let b = mix(d.b(), src.b());
    let a = (a1 + a2).min(255) as u8;

    *dst = Color::from_rgba(r, g, b, a).0;
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blend.rs"]
mod tests;
