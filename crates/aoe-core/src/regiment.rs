use crate::impact::Base;
use glam::Vec2;

/// Lay out a `rows × columns` block of square bases, row-major, with the
/// block's top-left corner at `origin`. Ids follow layout order.
pub fn regiment_bases(origin: Vec2, rows: u32, columns: u32, base_size_px: f32) -> Vec<Base> {
    let mut bases = Vec::with_capacity(rows as usize * columns as usize);
    for row in 0..rows {
        for col in 0..columns {
            let center = origin
                + Vec2::new(
                    (col as f32 + 0.5) * base_size_px,
                    (row as f32 + 0.5) * base_size_px,
                );
            bases.push(Base {
                id: bases.len(),
                center,
            });
        }
    }
    bases
}
