// =============================================================================
// Voltwerk Web - Translations
// =============================================================================
// Table of Contents:
// 1. Language
// 2. Reactive helper
// 3. Translation tables (en / fr / nl)
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Language
// -----------------------------------------------------------------------------

/// UI languages. The shop sits in Brussels, so all three local languages
/// get first-class treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Fr,
    Nl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Nl];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Nl => "nl",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "nl" => Some(Language::Nl),
            _ => None,
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "\u{1F1EC}\u{1F1E7}",
            Language::Fr => "\u{1F1EB}\u{1F1F7}",
            Language::Nl => "\u{1F1E7}\u{1F1EA}",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fr => "FR",
            Language::Nl => "NL",
        }
    }

    /// Resolve a translation key. Unknown keys fall back to the key itself
    /// so a missing entry shows up in the UI instead of blanking it.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        let hit = match self {
            Language::En => en(key),
            Language::Fr => fr(key),
            Language::Nl => nl(key),
        };
        hit.unwrap_or(key)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

// -----------------------------------------------------------------------------
// 2. Reactive helper
// -----------------------------------------------------------------------------

/// Closure that re-resolves `key` whenever the language signal changes.
/// Drop it straight into a view as text or an attribute value.
pub fn t(language: RwSignal<Language>, key: &'static str) -> impl Copy + Fn() -> &'static str {
    move || language.get().translate(key)
}

// -----------------------------------------------------------------------------
// 3. Translation tables
// -----------------------------------------------------------------------------

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        // Navigation
        "navCalculator" => "Designer",
        "navService" => "Repairs",

        // Pack designer
        "calcTitle" => "Battery Pack Designer",
        "calcSubtitle" => "Size a replacement pack for any ride",
        "batterySpecs" => "Battery specifications",
        "voltagePerCell" => "Voltage per cell (V)",
        "capacityPerCell" => "Capacity per cell (Ah)",
        "cellsInSeries" => "Cells in series",
        "cellsInParallel" => "Cells in parallel",
        "enclosureSize" => "Enclosure size (cm)",
        "height" => "Height",
        "length" => "Length",
        "width" => "Width",
        "cellType" => "Cell type",
        "calculate" => "Calculate pack",
        "totalVoltage" => "Total voltage",
        "totalCapacity" => "Total capacity",
        "totalCells" => "Total cells",
        "deckVolume" => "Enclosure volume",
        "cellsFit" => "Cells that fit",
        "cellConfiguration" => "Cell configuration",
        "emptyPrompt" => "Enter your specifications and calculate to see the pack layout",
        "configuration" => "Configuration",
        "inSeriesHorizontal" => "cells in series (horizontal)",
        "parallelVertical" => "parallel groups (vertical)",
        "seriesAxis" => "Series \u{2192}",
        "parallelAxis" => "Parallel \u{2193}",
        "packCaption" => "Pack",

        // Service & repair
        "serviceRepair" => "Service & repair",
        "selectVehicleAndService" => "Tell us what you ride and what it needs",
        "selectVehicle" => "1. Select your vehicle",
        "selectBrand" => "2. Brand (optional)",
        "noBrand" => "Not sure / other brand",
        "selectService" => "3. Select a service",
        "eSteps" => "E-steps",
        "eBikes" => "E-bikes",
        "monowheels" => "Monowheels",
        "hoverboards" => "Hoverboards",
        "batteryRevision" => "Battery overhaul",
        "batteryRevisionDesc" => "Cell-level diagnosis, spot welding and BMS replacement",
        "tireRepair" => "Tires & tubes",
        "tireRepairDesc" => "Flat repair, solid tires and tubeless conversion",
        "motorRepair" => "Motor repair",
        "motorRepairDesc" => "Hub motor bearings, windings and hall sensors",
        "controllerElectronics" => "Controller & electronics",
        "controllerElectronicsDesc" => "Controllers, displays, wiring and diagnostics",
        "brakes" => "Brakes",
        "brakesDesc" => "Discs, pads, hydraulics and cable adjustment",
        "maintenance" => "Maintenance",
        "maintenanceDesc" => "Full check-up and preventive servicing",
        "other" => "Something else?",
        "otherDesc" => "Not in the list? We fix most e-mobility gear.",
        "contactUs2" => "Get in touch",
        "finishRequest" => "Finish your request by e-mail",
        "requestSubject" => "Service request",
        "requestCategory" => "Vehicle",
        "requestBrand" => "Brand",
        "requestService" => "Service",
        "requestReference" => "Reference",

        // Not found
        "notFoundTitle" => "Page not found",
        "notFoundBody" => "Nothing is parked at this address.",
        "goHome" => "Back to the designer",

        _ => return None,
    })
}

fn fr(key: &str) -> Option<&'static str> {
    Some(match key {
        // Navigation
        "navCalculator" => "Concepteur",
        "navService" => "Réparations",

        // Pack designer
        "calcTitle" => "Concepteur de batterie",
        "calcSubtitle" => "Dimensionnez un pack de remplacement pour votre engin",
        "batterySpecs" => "Spécifications de la batterie",
        "voltagePerCell" => "Tension par cellule (V)",
        "capacityPerCell" => "Capacité par cellule (Ah)",
        "cellsInSeries" => "Cellules en série",
        "cellsInParallel" => "Cellules en parallèle",
        "enclosureSize" => "Dimensions du compartiment (cm)",
        "height" => "Hauteur",
        "length" => "Longueur",
        "width" => "Largeur",
        "cellType" => "Type de cellule",
        "calculate" => "Calculer le pack",
        "totalVoltage" => "Tension totale",
        "totalCapacity" => "Capacité totale",
        "totalCells" => "Nombre de cellules",
        "deckVolume" => "Volume du compartiment",
        "cellsFit" => "Cellules logeables",
        "cellConfiguration" => "Configuration des cellules",
        "emptyPrompt" => "Saisissez vos spécifications puis calculez pour voir la disposition",
        "configuration" => "Configuration",
        "inSeriesHorizontal" => "cellules en série (horizontal)",
        "parallelVertical" => "groupes en parallèle (vertical)",
        "seriesAxis" => "Série \u{2192}",
        "parallelAxis" => "Parallèle \u{2193}",
        "packCaption" => "Pack",

        // Service & repair
        "serviceRepair" => "Service et réparation",
        "selectVehicleAndService" => "Dites-nous ce que vous roulez et ce qu'il lui faut",
        "selectVehicle" => "1. Choisissez votre véhicule",
        "selectBrand" => "2. Marque (facultatif)",
        "noBrand" => "Je ne sais pas / autre marque",
        "selectService" => "3. Choisissez un service",
        "eSteps" => "Trottinettes électriques",
        "eBikes" => "Vélos électriques",
        "monowheels" => "Monoroues",
        "hoverboards" => "Hoverboards",
        "batteryRevision" => "Révision de batterie",
        "batteryRevisionDesc" => "Diagnostic des cellules, soudure par points et remplacement du BMS",
        "tireRepair" => "Pneus et chambres",
        "tireRepairDesc" => "Crevaisons, pneus pleins et passage en tubeless",
        "motorRepair" => "Réparation moteur",
        "motorRepairDesc" => "Roulements, bobinages et capteurs du moteur-roue",
        "controllerElectronics" => "Contrôleur et électronique",
        "controllerElectronicsDesc" => "Contrôleurs, écrans, câblage et diagnostic",
        "brakes" => "Freins",
        "brakesDesc" => "Disques, plaquettes, hydraulique et réglage des câbles",
        "maintenance" => "Entretien",
        "maintenanceDesc" => "Contrôle complet et entretien préventif",
        "other" => "Autre chose ?",
        "otherDesc" => "Pas dans la liste ? Nous réparons presque tout.",
        "contactUs2" => "Contactez-nous",
        "finishRequest" => "Terminez votre demande par e-mail",
        "requestSubject" => "Demande de service",
        "requestCategory" => "Véhicule",
        "requestBrand" => "Marque",
        "requestService" => "Service",
        "requestReference" => "Référence",

        // Not found
        "notFoundTitle" => "Page introuvable",
        "notFoundBody" => "Rien n'est garé à cette adresse.",
        "goHome" => "Retour au concepteur",

        _ => return None,
    })
}

fn nl(key: &str) -> Option<&'static str> {
    Some(match key {
        // Navigation
        "navCalculator" => "Ontwerper",
        "navService" => "Herstellingen",

        // Pack designer
        "calcTitle" => "Batterijpack ontwerper",
        "calcSubtitle" => "Bereken een vervangpack voor elk voertuig",
        "batterySpecs" => "Batterijspecificaties",
        "voltagePerCell" => "Spanning per cel (V)",
        "capacityPerCell" => "Capaciteit per cel (Ah)",
        "cellsInSeries" => "Cellen in serie",
        "cellsInParallel" => "Cellen in parallel",
        "enclosureSize" => "Afmetingen behuizing (cm)",
        "height" => "Hoogte",
        "length" => "Lengte",
        "width" => "Breedte",
        "cellType" => "Celtype",
        "calculate" => "Bereken pack",
        "totalVoltage" => "Totale spanning",
        "totalCapacity" => "Totale capaciteit",
        "totalCells" => "Aantal cellen",
        "deckVolume" => "Volume behuizing",
        "cellsFit" => "Passende cellen",
        "cellConfiguration" => "Celconfiguratie",
        "emptyPrompt" => "Vul je specificaties in en bereken om de indeling te zien",
        "configuration" => "Configuratie",
        "inSeriesHorizontal" => "cellen in serie (horizontaal)",
        "parallelVertical" => "parallelle groepen (verticaal)",
        "seriesAxis" => "Serie \u{2192}",
        "parallelAxis" => "Parallel \u{2193}",
        "packCaption" => "Pack",

        // Service & repair
        "serviceRepair" => "Service en herstelling",
        "selectVehicleAndService" => "Vertel ons wat je rijdt en wat het nodig heeft",
        "selectVehicle" => "1. Kies je voertuig",
        "selectBrand" => "2. Merk (optioneel)",
        "noBrand" => "Weet ik niet / ander merk",
        "selectService" => "3. Kies een service",
        "eSteps" => "E-steps",
        "eBikes" => "E-bikes",
        "monowheels" => "Monowheels",
        "hoverboards" => "Hoverboards",
        "batteryRevision" => "Batterijrevisie",
        "batteryRevisionDesc" => "Celdiagnose, puntlassen en vervanging van het BMS",
        "tireRepair" => "Banden",
        "tireRepairDesc" => "Lekke banden, massieve banden en ombouw naar tubeless",
        "motorRepair" => "Motorherstelling",
        "motorRepairDesc" => "Lagers, wikkelingen en sensoren van de wielmotor",
        "controllerElectronics" => "Controller en elektronica",
        "controllerElectronicsDesc" => "Controllers, displays, bekabeling en diagnose",
        "brakes" => "Remmen",
        "brakesDesc" => "Schijven, remblokjes, hydrauliek en kabelafstelling",
        "maintenance" => "Onderhoud",
        "maintenanceDesc" => "Volledige controle en preventief onderhoud",
        "other" => "Iets anders?",
        "otherDesc" => "Staat het er niet bij? Wij herstellen bijna alles.",
        "contactUs2" => "Neem contact op",
        "finishRequest" => "Rond je aanvraag af per e-mail",
        "requestSubject" => "Serviceaanvraag",
        "requestCategory" => "Voertuig",
        "requestBrand" => "Merk",
        "requestService" => "Service",
        "requestReference" => "Referentie",

        // Not found
        "notFoundTitle" => "Pagina niet gevonden",
        "notFoundBody" => "Op dit adres staat niets geparkeerd.",
        "goHome" => "Terug naar de ontwerper",

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltwerk_core::catalog::{CATEGORIES, SERVICES};

    const KEYS: &[&str] = &[
        "navCalculator",
        "navService",
        "calcTitle",
        "calcSubtitle",
        "batterySpecs",
        "voltagePerCell",
        "capacityPerCell",
        "cellsInSeries",
        "cellsInParallel",
        "enclosureSize",
        "height",
        "length",
        "width",
        "cellType",
        "calculate",
        "totalVoltage",
        "totalCapacity",
        "totalCells",
        "deckVolume",
        "cellsFit",
        "cellConfiguration",
        "emptyPrompt",
        "configuration",
        "inSeriesHorizontal",
        "parallelVertical",
        "seriesAxis",
        "parallelAxis",
        "packCaption",
        "serviceRepair",
        "selectVehicleAndService",
        "selectVehicle",
        "selectBrand",
        "noBrand",
        "selectService",
        "other",
        "otherDesc",
        "contactUs2",
        "finishRequest",
        "requestSubject",
        "requestCategory",
        "requestBrand",
        "requestService",
        "requestReference",
        "notFoundTitle",
        "notFoundBody",
        "goHome",
    ];

    #[test]
    fn test_every_language_covers_ui_keys() {
        for language in Language::ALL {
            for key in KEYS {
                assert_ne!(
                    language.translate(key),
                    *key,
                    "missing {} translation for {}",
                    language.code(),
                    key
                );
            }
        }
    }

    #[test]
    fn test_every_language_covers_catalog_keys() {
        for language in Language::ALL {
            for service in &SERVICES {
                assert_ne!(language.translate(service.title_key), service.title_key);
                assert_ne!(
                    language.translate(service.description_key),
                    service.description_key
                );
            }
            for category in &CATEGORIES {
                assert_ne!(language.translate(category.id), category.id);
            }
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        for language in Language::ALL {
            assert_eq!(language.translate("definitelyNotAKey"), "definitelyNotAKey");
        }
    }

    #[test]
    fn test_language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("de"), None);
    }
}
