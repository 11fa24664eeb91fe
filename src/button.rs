use raylib::prelude::*;

use crate::assets::FontSlot;

/// Rectangular clickable control: filled background with a centered label.
pub struct Button {
    rect: Rectangle,
    label: String,
    fill: Color,
    label_color: Color,
}

impl Button {
    pub fn new(x: i32, y: i32, width: i32, height: i32, label: &str, fill: Color, label_color: Color) -> Button {
        Button {
            rect: Rectangle::new(x as f32, y as f32, width as f32, height as f32),
            label: label.to_string(),
            fill,
            label_color,
        }
    }

    /// Edge-inclusive point-in-rectangle test.
    pub fn hit_test(&self, point: Vector2) -> bool {
        point.x >= self.rect.x
            && point.x <= self.rect.x + self.rect.width
            && point.y >= self.rect.y
            && point.y <= self.rect.y + self.rect.height
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, font: &FontSlot) {
        d.draw_rectangle_rec(self.rect, self.fill);
        let size = font.measure(&self.label);
        let pos = Vector2::new(
            self.rect.x + (self.rect.width - size.x) / 2.0,
            self.rect.y + (self.rect.height - size.y) / 2.0,
        );
        font.draw(d, &self.label, pos, self.label_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Button {
        Button::new(300, 350, 200, 50, "Start Story", Color::GREEN, Color::BLACK)
    }

    #[test]
    fn hit_inside() {
        assert!(button().hit_test(Vector2::new(400.0, 375.0)));
    }

    #[test]
    fn hit_on_edges_is_inclusive() {
        let b = button();
        assert!(b.hit_test(Vector2::new(300.0, 350.0)));
        assert!(b.hit_test(Vector2::new(500.0, 400.0)));
    }

    #[test]
    fn miss_outside() {
        let b = button();
        assert!(!b.hit_test(Vector2::new(299.0, 375.0)));
        assert!(!b.hit_test(Vector2::new(400.0, 401.0)));
        assert!(!b.hit_test(Vector2::new(0.0, 0.0)));
    }
}
