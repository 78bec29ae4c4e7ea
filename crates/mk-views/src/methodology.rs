//! Static methodology page

use egui::{RichText, ScrollArea, Ui};

use mk_ui::{ScrollAreaExt, WidgetId};

use crate::widgets;
use crate::{View, ViewerContext, ViewId};

const SECTIONS: &[(&str, &str)] = &[
    (
        "Dataindsamling",
        "Mediekompasset indsamler automatisk artikler fra de største danske nyhedsmedier \
         gennem deres offentligt tilgængelige websider. Indsamlingen respekterer mediernes \
         robots.txt-filer og god praksis for datahøstning.",
    ),
    (
        "Politisk analyse",
        "Den politiske analyse baseres på en kombination af maskinlæringsmodeller trænet på \
         dansk politisk tekst. Ordvalg, temaer og vinklinger i artiklerne analyseres for at \
         placere dem på en politisk højre-venstre skala fra -1 til 1.",
    ),
    (
        "Kildeanalyse",
        "Antallet og diversiteten af citerede kilder opgøres pr. artikel. En høj \
         kildediversitet betyder, at mediet lader mange forskellige stemmer komme til orde.",
    ),
    (
        "Pålidelighed",
        "Pålidelighedsscoren sammenvejer faktatjek-historik, kildebrug og transparens om \
         rettelser. Scoren beregnes eksternt og vises her uden yderligere bearbejdning.",
    ),
    (
        "Teknik",
        "Al analyse sker i en ekstern tjeneste; dashboardet henter udelukkende færdigberegnede \
         tal via et HTTP-API og viser dem frem.",
    ),
    (
        "Forbehold",
        "Automatiseret analyse af politisk indhold er behæftet med usikkerhed. Scorerne bør \
         læses som indikationer, ikke som endegyldige domme over et medie.",
    ),
];

pub struct MethodologyView {
    id: ViewId,
    title: String,
}

impl MethodologyView {
    pub fn new() -> Self {
        Self {
            id: ViewId::new_v4(),
            title: "Metode".to_string(),
        }
    }
}

impl Default for MethodologyView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for MethodologyView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn ui(&mut self, _ctx: &ViewerContext, ui: &mut Ui) {
        ui.heading("Metode og dataindsamling");
        ui.add_space(6.0);

        ScrollArea::vertical()
            .id_builder(WidgetId::new("methodology").with("sections"))
            .show(ui, |ui| {
                for (title, body) in SECTIONS {
                    widgets::card_frame(ui).show(ui, |ui| {
                        ui.label(RichText::new(*title).strong());
                        ui.label(*body);
                    });
                    ui.add_space(8.0);
                }
            });
    }
}
