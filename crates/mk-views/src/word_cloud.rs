//! Word cloud over the combined word frequencies of every outlet
//!
//! The d3-cloud layout of the original is reproduced as an archimedean
//! spiral packer: words are placed largest-first, walking the spiral out
//! from the canvas center until a collision-free spot appears. Each word
//! independently draws a random 90° rotation, so the layout is intentionally
//! not deterministic across runs.

use std::f32::consts::FRAC_PI_2;

use egui::{Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Ui, Vec2};
use indexmap::IndexMap;
use rand::Rng;

use mk_core::wordfreq::{combined_frequencies, font_size};
use mk_core::RemoteData;

use crate::widgets::{self, lerp_color};
use crate::{View, ViewerContext, ViewId};

/// Minimum gap between placed words.
const WORD_PADDING: f32 = 5.0;
/// Spiral step per attempt, in radians.
const SPIRAL_STEP: f32 = 0.3;
/// Spiral radius growth per radian.
const SPIRAL_GROWTH: f32 = 1.6;
/// Attempts before a word is dropped from the cloud.
const MAX_ATTEMPTS: usize = 2000;

const CANVAS_HEIGHT: f32 = 400.0;

fn low_color() -> Color32 {
    Color32::from_rgb(0x69, 0xb3, 0xa2)
}

fn high_color() -> Color32 {
    Color32::from_rgb(0x34, 0x98, 0xdb)
}

fn highlight_color() -> Color32 {
    Color32::from_rgb(0xe7, 0x4c, 0x3c)
}

/// A word with its measured (unrotated) text extent.
#[derive(Debug, Clone)]
pub struct MeasuredWord {
    pub text: String,
    pub size: f32,
    pub extent: Vec2,
}

/// A word the packer found room for.
#[derive(Debug, Clone)]
pub struct PlacedWord {
    pub text: String,
    pub size: f32,
    pub rect: Rect,
    pub rotated: bool,
}

/// Pack words onto the canvas, largest first. Words that never find a free
/// spot are dropped, matching the original layout's behavior on crowded
/// canvases.
pub fn spiral_layout(
    words: &[MeasuredWord],
    canvas: Rect,
    rng: &mut impl Rng,
) -> Vec<PlacedWord> {
    let center = canvas.center();
    let mut placed: Vec<PlacedWord> = Vec::new();

    for word in words {
        let rotated = rng.gen_bool(0.5);
        let extent = if rotated {
            Vec2::new(word.extent.y, word.extent.x)
        } else {
            word.extent
        };

        let mut angle = 0.0f32;
        for _ in 0..MAX_ATTEMPTS {
            let radius = SPIRAL_GROWTH * angle;
            let pos = center + Vec2::new(radius * angle.cos(), radius * angle.sin());
            let rect = Rect::from_center_size(pos, extent);

            let collides = placed
                .iter()
                .any(|other| other.rect.expand(WORD_PADDING).intersects(rect));
            if canvas.contains_rect(rect) && !collides {
                placed.push(PlacedWord {
                    text: word.text.clone(),
                    size: word.size,
                    rect,
                    rotated,
                });
                break;
            }
            angle += SPIRAL_STEP;
        }
    }

    placed
}

struct CloudCache {
    key: (usize, u64, [u32; 2]),
    words: Vec<PlacedWord>,
    max_size: f32,
}

pub struct WordCloudView {
    id: ViewId,
    title: String,
    cache: Option<CloudCache>,
}

impl WordCloudView {
    pub fn new() -> Self {
        Self {
            id: ViewId::new_v4(),
            title: "Ordsky".to_string(),
            cache: None,
        }
    }

    fn rebuild_cache(
        &mut self,
        ui: &Ui,
        frequencies: &IndexMap<String, u64>,
        canvas: Rect,
        key: (usize, u64, [u32; 2]),
    ) {
        // Largest words first, so they claim the canvas center.
        let mut counted: Vec<(&String, &u64)> = frequencies.iter().collect();
        counted.sort_by(|a, b| b.1.cmp(a.1));

        let measured: Vec<MeasuredWord> = counted
            .iter()
            .map(|(text, count)| {
                let size = font_size(**count);
                let galley = ui.fonts(|fonts| {
                    fonts.layout_no_wrap(
                        (*text).clone(),
                        FontId::proportional(size),
                        Color32::WHITE,
                    )
                });
                MeasuredWord {
                    text: (*text).clone(),
                    size,
                    extent: galley.size(),
                }
            })
            .collect();

        let max_size = measured.first().map(|w| w.size).unwrap_or(1.0);
        let words = spiral_layout(&measured, canvas, &mut rand::thread_rng());
        self.cache = Some(CloudCache {
            key,
            words,
            max_size,
        });
    }
}

impl Default for WordCloudView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for WordCloudView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, ctx: &ViewerContext, ui: &mut Ui) {
        let analyses = ctx.analyses.read();
        match &*analyses {
            RemoteData::Loading => widgets::loading(ui),
            RemoteData::Failed(_) => {
                widgets::no_data(ui, "Ingen data – ordfrekvenserne kunne ikke hentes")
            }
            RemoteData::Ready(analyses) if analyses.is_empty() => {
                widgets::no_data(ui, "Ingen analyserede medier endnu")
            }
            RemoteData::Ready(analyses) => {
                ui.heading("Ordsky over mest brugte ord");

                let frequencies = combined_frequencies(analyses);
                let desired = Vec2::new(ui.available_width(), CANVAS_HEIGHT);
                let (canvas, response) = ui.allocate_exact_size(desired, Sense::hover());

                let total: u64 = frequencies.values().sum();
                let key = (
                    frequencies.len(),
                    total,
                    [canvas.width() as u32, canvas.height() as u32],
                );
                let stale = self.cache.as_ref().map(|c| c.key != key).unwrap_or(true);
                if stale {
                    self.rebuild_cache(ui, &frequencies, canvas, key);
                }

                let painter = ui.painter_at(canvas);
                painter.rect_stroke(
                    canvas,
                    4.0,
                    Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color),
                );
                if let Some(cache) = &self.cache {
                    let hover = response.hover_pos();
                    for word in &cache.words {
                        let hovered = hover.map(|p| word.rect.contains(p)).unwrap_or(false);
                        let color = if hovered {
                            highlight_color()
                        } else {
                            lerp_color(low_color(), high_color(), word.size / cache.max_size)
                        };
                        let galley = ui.fonts(|fonts| {
                            fonts.layout_no_wrap(
                                word.text.clone(),
                                FontId::proportional(word.size),
                                color,
                            )
                        });
                        // A -90° rotation about `pos` maps the galley box to
                        // pos + [0, h] x [-w, 0], so anchor at the bottom-left
                        // corner to fill the placed rect.
                        let (pos, angle) = if word.rotated {
                            (Pos2::new(word.rect.left(), word.rect.bottom()), -FRAC_PI_2)
                        } else {
                            (word.rect.left_top(), 0.0)
                        };
                        painter.add(egui::Shape::Text(egui::epaint::TextShape {
                            pos,
                            galley,
                            underline: Stroke::NONE,
                            override_text_color: None,
                            angle,
                        }));
                    }
                }

                ui.add_space(6.0);
                ui.label(
                    RichText::new(
                        "Visualiseringen viser de mest brugte ord på tværs af alle analyserede \
                         artikler. Størrelsen indikerer hvor ofte ordet bliver brugt; blå nuancer \
                         indikerer højere frekvens, grønne nuancer lavere.",
                    )
                    .small()
                    .weak(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn measured(text: &str, size: f32) -> MeasuredWord {
        // Extent approximation good enough for layout tests.
        MeasuredWord {
            text: text.to_string(),
            size,
            extent: Vec2::new(text.len() as f32 * size * 0.6, size * 1.2),
        }
    }

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(800.0, 400.0))
    }

    #[test]
    fn places_words_without_overlap() {
        let words: Vec<MeasuredWord> = (0..30)
            .map(|i| measured(&format!("ord{i}"), 40.0 - i as f32))
            .collect();
        let mut rng = StdRng::seed_from_u64(7);

        let placed = spiral_layout(&words, canvas(), &mut rng);
        assert!(!placed.is_empty());

        for (i, a) in placed.iter().enumerate() {
            assert!(canvas().contains_rect(a.rect), "{} escapes the canvas", a.text);
            for b in placed.iter().skip(i + 1) {
                assert!(
                    !a.rect.intersects(b.rect),
                    "{} overlaps {}",
                    a.text,
                    b.text
                );
            }
        }
    }

    #[test]
    fn first_word_lands_in_the_middle() {
        let words = [measured("regering", 40.0)];
        let mut rng = StdRng::seed_from_u64(1);

        let placed = spiral_layout(&words, canvas(), &mut rng);
        assert_eq!(placed.len(), 1);
        let delta = placed[0].rect.center() - canvas().center();
        assert!(delta.length() < 1.0);
    }

    #[test]
    fn rotation_swaps_the_extent() {
        let word = measured("klimapolitik", 30.0);
        let mut rng = StdRng::seed_from_u64(0);

        // Run until both orientations have been seen.
        let mut seen_rotated = false;
        let mut seen_upright = false;
        for _ in 0..32 {
            let placed = spiral_layout(std::slice::from_ref(&word), canvas(), &mut rng);
            let placed = &placed[0];
            if placed.rotated {
                seen_rotated = true;
                assert_eq!(placed.rect.width(), word.extent.y);
                assert_eq!(placed.rect.height(), word.extent.x);
            } else {
                seen_upright = true;
                assert_eq!(placed.rect.width(), word.extent.x);
                assert_eq!(placed.rect.height(), word.extent.y);
            }
        }
        assert!(seen_rotated && seen_upright);
    }

    #[test]
    fn oversized_words_are_dropped() {
        let words = [measured("altfordetlangtord", 600.0)];
        let mut rng = StdRng::seed_from_u64(3);

        let placed = spiral_layout(&words, canvas(), &mut rng);
        assert!(placed.is_empty());
    }
}
