use glam::Vec3;

// Colors in the scene model are kept in sRGB, the same space the palette is
// authored in. The renderer linearizes them when filling vertex buffers.

/// Unpack `0xRRGGBB` into sRGB components in `[0, 1]`.
#[inline]
pub fn hex_rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// HSL → RGB with hue, saturation and lightness all in `[0, 1]`.
pub fn hsl_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let q = 2.0 * l - p;
    Vec3::new(
        hue_to_rgb(q, p, h + 1.0 / 3.0),
        hue_to_rgb(q, p, h),
        hue_to_rgb(q, p, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * 6.0 * (2.0 / 3.0 - t);
    }
    p
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.077_399_38
    } else {
        ((c * 0.947_867_3) + 0.052_132_7).powf(2.4)
    }
}

#[inline]
pub fn linear_rgb(srgb: Vec3) -> Vec3 {
    Vec3::new(
        srgb_to_linear(srgb.x),
        srgb_to_linear(srgb.y),
        srgb_to_linear(srgb.z),
    )
}
