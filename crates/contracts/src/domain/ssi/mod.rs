//! SSI weekly-metrics contracts: skeleton table rows, classification
//! request/response and the static indicator catalog.

pub mod catalogo;

use serde::{Deserialize, Serialize};

/// Number of week columns in the SSI grid. The backend and the frontend
/// both treat index position as the week identity (week 1 at index 0).
pub const SEMANAS_POR_CICLO: usize = 12;

/// Unit of measure for an indicator; drives formatting and input semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unidade {
    #[serde(rename = "NUMERO")]
    Numero,
    #[serde(rename = "PERCENTUAL")]
    Percentual,
}

impl Unidade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unidade::Numero => "NUMERO",
            Unidade::Percentual => "PERCENTUAL",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "NUMERO" => Some(Unidade::Numero),
            "PERCENTUAL" => Some(Unidade::Percentual),
            _ => None,
        }
    }
}

/// Three-tier classification the backend assigns to one week cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusSemana {
    #[serde(rename = "OTIMO")]
    Otimo,
    #[serde(rename = "BOM")]
    Bom,
    #[serde(rename = "RUIM")]
    Ruim,
}

impl StatusSemana {
    pub fn rotulo(&self) -> &'static str {
        match self {
            StatusSemana::Otimo => "Ótimo",
            StatusSemana::Bom => "Bom",
            StatusSemana::Ruim => "Ruim",
        }
    }
}

/// Guidance texts attached to an indicator, shown in the side panel when
/// the indicator trends favorably / unfavorably.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicadorTextos {
    #[serde(default)]
    pub positivo: Vec<String>,
    #[serde(default)]
    pub negativo: Vec<String>,
    #[serde(rename = "planoDeAcao", default)]
    pub plano_de_acao: Vec<String>,
}

/// One row of the skeleton table returned by the backend: an indicator
/// definition plus its 12-week observation vector.
///
/// `semanas` length is NOT trusted as received; the frontend normalizes it
/// to exactly [`SEMANAS_POR_CICLO`] entries at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinhaSsi {
    pub indicador: String,
    pub nome: String,
    #[serde(default)]
    pub meta: String,
    pub unidade: Unidade,
    #[serde(default)]
    pub textos: IndicadorTextos,
    #[serde(default)]
    pub semanas: Vec<f64>,
}

/// Input item for the batch classify call: indicator key plus the full
/// 12-week vector currently in the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemClassificacao {
    pub indicador: String,
    pub semanas: Vec<f64>,
}

/// One classified row returned by the backend. `semanas` is the
/// server-normalized echo of the values and wins over the local copy;
/// `status_semanal` is positionally aligned with it, `None` where the
/// backend omitted a week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinhaClassificada {
    pub indicador: String,
    #[serde(default)]
    pub semanas: Vec<f64>,
    #[serde(rename = "statusSemanal", default)]
    pub status_semanal: Vec<Option<StatusSemana>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&StatusSemana::Otimo).unwrap(),
            "\"OTIMO\""
        );
        assert_eq!(
            serde_json::from_str::<StatusSemana>("\"RUIM\"").unwrap(),
            StatusSemana::Ruim
        );
    }

    #[test]
    fn test_linha_classificada_wire_shape() {
        let json = r#"{
            "indicador": "SSI_SETOR",
            "semanas": [1.0, 2.0],
            "statusSemanal": ["OTIMO", null, "BOM"]
        }"#;
        let linha: LinhaClassificada = serde_json::from_str(json).unwrap();
        assert_eq!(linha.indicador, "SSI_SETOR");
        assert_eq!(linha.status_semanal[0], Some(StatusSemana::Otimo));
        assert_eq!(linha.status_semanal[1], None);
    }

    #[test]
    fn test_linha_ssi_defaults() {
        // Backend may omit semanas/textos entirely; the row still parses.
        let json = r#"{"indicador":"CAFES_AGENDADOS","nome":"Cafés agendados","unidade":"NUMERO"}"#;
        let linha: LinhaSsi = serde_json::from_str(json).unwrap();
        assert!(linha.semanas.is_empty());
        assert!(linha.textos.positivo.is_empty());
    }

    #[test]
    fn test_textos_rename() {
        let textos = IndicadorTextos {
            positivo: vec!["a".into()],
            negativo: vec![],
            plano_de_acao: vec!["b".into()],
        };
        let json = serde_json::to_string(&textos).unwrap();
        assert!(json.contains("\"planoDeAcao\""));
    }
}
