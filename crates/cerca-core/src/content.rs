//! Topic records shown by the navigation nodes and the detail panel.
//!
//! The display block for each topic lives in the front-end; the core only
//! knows the metadata below.

use crate::constants::SECTION_COUNT;
use crate::error::CercaError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: usize,
    pub label: &'static str,
    pub icon_key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const SECTIONS: [Section; SECTION_COUNT] = [
    Section {
        id: 0,
        label: "Cliente",
        icon_key: "users",
        title: "El Segmento \"Urbano Saturado\"",
        subtitle: "Quién necesita irse sin alejarse",
    },
    Section {
        id: 1,
        label: "Recursos",
        icon_key: "palette",
        title: "Estética de la Intimidad",
        subtitle: "Materiales, tono y atmósfera",
    },
    Section {
        id: 2,
        label: "Narrativa",
        icon_key: "waves",
        title: "Transmedia Storytelling",
        subtitle: "Una historia, muchos canales",
    },
    Section {
        id: 3,
        label: "Viabilidad",
        icon_key: "shield",
        title: "Asset Light & Risk Management",
        subtitle: "Crecer sin cargar peso",
    },
    Section {
        id: 4,
        label: "Símbolos",
        icon_key: "compass",
        title: "Semiótica de Proximidad",
        subtitle: "Lo cercano como lenguaje",
    },
];

pub fn section(index: usize) -> Result<&'static Section, CercaError> {
    SECTIONS.get(index).ok_or(CercaError::UnknownSection(index))
}
