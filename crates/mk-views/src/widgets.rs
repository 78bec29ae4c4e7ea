//! Painted widgets shared by the views

use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Rounding, Sense, Ui, Vec2};

use mk_core::bias::marker_position;
use mk_core::compare::{BiasMarker, MetricBar};
use mk_ui::theme;

/// Parse a `#RRGGBB` string, falling back to the default outlet grey.
pub fn hex_color(hex: &str) -> Color32 {
    let digits = hex.trim_start_matches('#');
    if digits.len() == 6 {
        let channel = |range| u8::from_str_radix(&digits[range], 16);
        if let (Ok(r), Ok(g), Ok(b)) = (channel(0..2), channel(2..4), channel(4..6)) {
            return Color32::from_rgb(r, g, b);
        }
    }
    Color32::from_rgb(0x66, 0x66, 0x66)
}

/// Linear interpolation between two colors.
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Standard card frame for dashboard content.
pub fn card_frame(ui: &Ui) -> egui::Frame {
    egui::Frame::none()
        .fill(ui.visuals().window_fill)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .rounding(Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
}

/// Centered placeholder for views whose fetch has not delivered data.
pub fn no_data(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(message).weak());
    });
}

/// Centered spinner for views whose fetch is still in flight.
pub fn loading(ui: &mut Ui) {
    ui.centered_and_justified(|ui| {
        ui.spinner();
    });
}

/// Left-to-right leaning gradient: red over light grey to blue.
fn leaning_track(ui: &Ui, rect: Rect) {
    const SEGMENTS: usize = 48;
    let left = Color32::from_rgb(244, 67, 54);
    let mid = Color32::from_rgb(245, 245, 245);
    let right = Color32::from_rgb(33, 150, 243);

    let painter = ui.painter();
    for i in 0..SEGMENTS {
        let t0 = i as f32 / SEGMENTS as f32;
        let t1 = (i + 1) as f32 / SEGMENTS as f32;
        let color = if t0 < 0.5 {
            lerp_color(left, mid, t0 * 2.0)
        } else {
            lerp_color(mid, right, (t0 - 0.5) * 2.0)
        };
        let segment = Rect::from_min_max(
            Pos2::new(rect.left() + rect.width() * t0, rect.top()),
            Pos2::new(rect.left() + rect.width() * t1, rect.bottom()),
        );
        painter.rect_filled(segment, Rounding::same(0.0), color);
    }
}

fn scale_labels(ui: &Ui, track: Rect) {
    let painter = ui.painter();
    let font = FontId::proportional(10.0);
    let color = theme::secondary_text_color();
    let y = track.bottom() + 4.0;
    painter.text(
        Pos2::new(track.left(), y),
        Align2::LEFT_TOP,
        "Venstreorienteret",
        font.clone(),
        color,
    );
    painter.text(
        Pos2::new(track.center().x, y),
        Align2::CENTER_TOP,
        "Neutral",
        font.clone(),
        color,
    );
    painter.text(
        Pos2::new(track.right(), y),
        Align2::RIGHT_TOP,
        "Højreorienteret",
        font,
        color,
    );
}

/// Per-outlet leaning scale: gradient track, black marker, raw value above
/// the marker. An out-of-range score draws its marker off the track rather
/// than being clamped.
pub fn bias_scale(ui: &mut Ui, bias: f64) {
    let desired = Vec2::new(ui.available_width(), 58.0);
    let (rect, _response) = ui.allocate_exact_size(desired, Sense::hover());

    let track = Rect::from_min_size(
        Pos2::new(rect.left(), rect.top() + 18.0),
        Vec2::new(rect.width(), 14.0),
    );
    leaning_track(ui, track);

    let x = track.left() + track.width() * (marker_position(bias) as f32 / 100.0);
    let painter = ui.painter();
    painter.rect_filled(
        Rect::from_center_size(Pos2::new(x, track.center().y), Vec2::new(4.0, 26.0)),
        Rounding::same(2.0),
        Color32::BLACK,
    );
    painter.text(
        Pos2::new(x, rect.top()),
        Align2::CENTER_TOP,
        format!("{bias:.2}"),
        FontId::proportional(11.0),
        ui.visuals().text_color(),
    );
    scale_labels(ui, track);
}

/// Shared leaning scale with one colored, labelled marker per compared
/// outlet.
pub fn comparison_scale(ui: &mut Ui, markers: &[BiasMarker]) {
    let desired = Vec2::new(ui.available_width(), 72.0);
    let (rect, _response) = ui.allocate_exact_size(desired, Sense::hover());

    let track = Rect::from_min_size(
        Pos2::new(rect.left(), rect.top() + 32.0),
        Vec2::new(rect.width(), 14.0),
    );
    leaning_track(ui, track);

    let painter = ui.painter();
    for marker in markers {
        let color = hex_color(&marker.color);
        let x = track.left() + track.width() * (marker.position as f32 / 100.0);
        painter.rect_filled(
            Rect::from_center_size(Pos2::new(x, track.center().y), Vec2::new(4.0, 26.0)),
            Rounding::same(2.0),
            color,
        );
        painter.text(
            Pos2::new(x, track.top() - 8.0),
            Align2::CENTER_BOTTOM,
            &marker.outlet,
            FontId::proportional(10.0),
            color,
        );
    }
    scale_labels(ui, track);
}

/// One proportional topic bar. The fill is clamped to the track; the printed
/// percentage is not.
pub fn topic_bar(ui: &mut Ui, topic: &str, share: f64) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [100.0, 16.0],
            egui::Label::new(RichText::new(topic).small()),
        );

        let width = (ui.available_width() - 48.0).max(24.0);
        let (rect, _response) = ui.allocate_exact_size(Vec2::new(width, 10.0), Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, Rounding::same(5.0), ui.visuals().faint_bg_color);
        let fraction = (share as f32).clamp(0.0, 1.0);
        if fraction > 0.0 {
            let fill = Rect::from_min_size(rect.min, Vec2::new(rect.width() * fraction, rect.height()));
            painter.rect_filled(fill, Rounding::same(5.0), theme::accent_color());
        }

        ui.label(RichText::new(format!("{}%", (share * 100.0).round() as i64)).small());
    });
}

/// One colored metric bar in a comparison section.
pub fn comparison_metric_bar(ui: &mut Ui, bar: &MetricBar) {
    let color = hex_color(&bar.color);
    ui.horizontal(|ui| {
        ui.add_sized(
            [110.0, 16.0],
            egui::Label::new(RichText::new(&bar.outlet).small().color(color)),
        );

        let width = (ui.available_width() - 48.0).max(24.0);
        let (rect, _response) = ui.allocate_exact_size(Vec2::new(width, 10.0), Sense::hover());
        let painter = ui.painter();
        painter.rect_filled(rect, Rounding::same(5.0), ui.visuals().faint_bg_color);
        let fraction = (bar.percent as f32 / 100.0).clamp(0.0, 1.0);
        if fraction > 0.0 {
            let fill = Rect::from_min_size(rect.min, Vec2::new(rect.width() * fraction, rect.height()));
            painter.rect_filled(fill, Rounding::same(5.0), color);
        }

        ui.label(RichText::new(format!("{}%", bar.percent.round() as i64)).small());
    });
}

/// Small labelled percentage, used for the card's metric pairs.
pub fn percent_stat(ui: &mut Ui, label: &str, value: f64) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().color(theme::secondary_text_color()));
        ui.label(
            RichText::new(format!("{}%", (value * 100.0).round() as i64))
                .strong()
                .size(17.0),
        );
    });
}

/// Outlined tag in an outlet's color.
pub fn tag(ui: &mut Ui, text: &str, color: Color32) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_color("#C70000"), Color32::from_rgb(0xC7, 0x00, 0x00));
        assert_eq!(hex_color("1B5E20"), Color32::from_rgb(0x1B, 0x5E, 0x20));
    }

    #[test]
    fn bad_hex_falls_back_to_grey() {
        let grey = Color32::from_rgb(0x66, 0x66, 0x66);
        assert_eq!(hex_color(""), grey);
        assert_eq!(hex_color("#12"), grey);
        assert_eq!(hex_color("#GGGGGG"), grey);
    }

    #[test]
    fn lerp_color_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
