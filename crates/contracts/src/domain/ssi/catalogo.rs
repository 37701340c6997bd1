//! Static indicator catalog.
//!
//! The metas editor renders a fixed, grouped set of metric rows defined
//! here on the client; the backend only hydrates `valorMeta`/`unidade`
//! into this template. Indicator definitions are never created or deleted
//! from the frontend.

use super::Unidade;

/// One catalog entry: stable metric key plus display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinicaoIndicador {
    pub metrica: &'static str,
    pub nome: &'static str,
    pub grupo: &'static str,
    /// Default unit; the metas editor may override it per saved meta.
    pub unidade: Unidade,
}

pub const GRUPO_SSI: &str = "SSI LinkedIn";
pub const GRUPO_NETWORKING: &str = "Networking";
pub const GRUPO_PROCESSOS: &str = "Processos seletivos";

pub const CATALOGO: &[DefinicaoIndicador] = &[
    DefinicaoIndicador {
        metrica: "SSI_GERAL",
        nome: "SSI geral",
        grupo: GRUPO_SSI,
        unidade: Unidade::Numero,
    },
    DefinicaoIndicador {
        metrica: "SSI_SETOR",
        nome: "SSI no setor",
        grupo: GRUPO_SSI,
        unidade: Unidade::Percentual,
    },
    DefinicaoIndicador {
        metrica: "SSI_REDE",
        nome: "SSI na rede",
        grupo: GRUPO_SSI,
        unidade: Unidade::Percentual,
    },
    DefinicaoIndicador {
        metrica: "VISUALIZACOES_PERFIL",
        nome: "Visualizações do perfil",
        grupo: GRUPO_SSI,
        unidade: Unidade::Numero,
    },
    DefinicaoIndicador {
        metrica: "APARICOES_PESQUISA",
        nome: "Aparições em pesquisa",
        grupo: GRUPO_SSI,
        unidade: Unidade::Numero,
    },
    DefinicaoIndicador {
        metrica: "IMPRESSOES_PUBLICACOES",
        nome: "Impressões de publicações",
        grupo: GRUPO_SSI,
        unidade: Unidade::Numero,
    },
    DefinicaoIndicador {
        metrica: "CONEXOES_REALIZADAS",
        nome: "Conexões realizadas",
        grupo: GRUPO_NETWORKING,
        unidade: Unidade::Numero,
    },
    DefinicaoIndicador {
        metrica: "MENSAGENS_ENVIADAS",
        nome: "Mensagens enviadas",
        grupo: GRUPO_NETWORKING,
        unidade: Unidade::Numero,
    },
    DefinicaoIndicador {
        metrica: "CAFES_AGENDADOS",
        nome: "Cafés agendados",
        grupo: GRUPO_NETWORKING,
        unidade: Unidade::Numero,
    },
    DefinicaoIndicador {
        metrica: "CAFES_REALIZADOS",
        nome: "Cafés realizados",
        grupo: GRUPO_NETWORKING,
        unidade: Unidade::Numero,
    },
    DefinicaoIndicador {
        metrica: "CANDIDATURAS_ENVIADAS",
        nome: "Candidaturas enviadas",
        grupo: GRUPO_PROCESSOS,
        unidade: Unidade::Numero,
    },
    DefinicaoIndicador {
        metrica: "ENTREVISTAS_AGENDADAS",
        nome: "Entrevistas agendadas",
        grupo: GRUPO_PROCESSOS,
        unidade: Unidade::Numero,
    },
];

/// Distinct groups in catalog order, for grouped rendering.
pub fn grupos() -> Vec<&'static str> {
    let mut vistos: Vec<&'static str> = Vec::new();
    for def in CATALOGO {
        if !vistos.contains(&def.grupo) {
            vistos.push(def.grupo);
        }
    }
    vistos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metricas_unicas() {
        for (i, a) in CATALOGO.iter().enumerate() {
            for b in &CATALOGO[i + 1..] {
                assert_ne!(a.metrica, b.metrica, "metrica duplicada no catálogo");
            }
        }
    }

    #[test]
    fn test_grupos_em_ordem() {
        assert_eq!(
            grupos(),
            vec![GRUPO_SSI, GRUPO_NETWORKING, GRUPO_PROCESSOS]
        );
    }
}
