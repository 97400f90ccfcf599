//! Two named colour palettes and the blend the background fades through.
//!
//! `URBAN` is shown at rest (blend 0); `CALM` takes over while a topic is
//! open (blend 1).

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const fn hex(v: u32) -> Self {
        Self(
            ((v >> 16) & 0xff) as f32,
            ((v >> 8) & 0xff) as f32,
            (v & 0xff) as f32,
        )
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb(
            self.0 + (other.0 - self.0) * t,
            self.1 + (other.1 - self.1) * t,
            self.2 + (other.2 - self.2) * t,
        )
    }

    /// CSS `rgba(...)` string; alpha is clamped to \[0, 1\].
    pub fn css(self, alpha: f32) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.0.round().clamp(0.0, 255.0) as u8,
            self.1.round().clamp(0.0, 255.0) as u8,
            self.2.round().clamp(0.0, 255.0) as u8,
            alpha.clamp(0.0, 1.0)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub backdrop_inner: Rgb,
    pub backdrop_outer: Rgb,
    pub disc: Rgb,
    pub street: Rgb,
    pub pedestrian: Rgb,
    pub particle: Rgb,
    pub ring: Rgb,
    pub exterior: Rgb,
    pub caption: Rgb,
}

pub const URBAN: Palette = Palette {
    backdrop_inner: Rgb::hex(0x16141a),
    backdrop_outer: Rgb::hex(0x050505),
    disc: Rgb::hex(0x1d1a1f),
    street: Rgb::hex(0x3a3540),
    pedestrian: Rgb::hex(0xe8e2d8),
    particle: Rgb::hex(0x9fb4c8),
    ring: Rgb::hex(0x8a8f99),
    exterior: Rgb::hex(0x6f7c8c),
    caption: Rgb::hex(0xffffff),
};

pub const CALM: Palette = Palette {
    backdrop_inner: Rgb::hex(0x2a1f17),
    backdrop_outer: Rgb::hex(0x0a0806),
    disc: Rgb::hex(0x241b14),
    street: Rgb::hex(0x4a3a2c),
    pedestrian: Rgb::hex(0xf3dcc0),
    particle: Rgb::hex(0xd4a373),
    ring: Rgb::hex(0xc49a6c),
    exterior: Rgb::hex(0xe9c46a),
    caption: Rgb::hex(0xd4a373),
};

impl Palette {
    pub fn blend(a: &Palette, b: &Palette, t: f32) -> Palette {
        Palette {
            backdrop_inner: a.backdrop_inner.lerp(b.backdrop_inner, t),
            backdrop_outer: a.backdrop_outer.lerp(b.backdrop_outer, t),
            disc: a.disc.lerp(b.disc, t),
            street: a.street.lerp(b.street, t),
            pedestrian: a.pedestrian.lerp(b.pedestrian, t),
            particle: a.particle.lerp(b.particle, t),
            ring: a.ring.lerp(b.ring, t),
            exterior: a.exterior.lerp(b.exterior, t),
            caption: a.caption.lerp(b.caption, t),
        }
    }
}
