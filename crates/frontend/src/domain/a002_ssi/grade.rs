//! In-memory grid model: rows are indicators, columns are weeks 1..12.
//!
//! All width normalization happens here, at the boundary where backend
//! data enters the grid. Cells are always finite numbers; statuses are
//! only ever written by merging a classify response, never computed
//! locally.

use std::collections::HashMap;

use contracts::domain::ssi::{
    IndicadorTextos, ItemClassificacao, LinhaClassificada, LinhaSsi, StatusSemana, Unidade,
    SEMANAS_POR_CICLO,
};

use crate::shared::numeric::coagir_celula;

/// Force a week vector to exactly [`SEMANAS_POR_CICLO`] finite entries:
/// shorter input is zero-padded, longer input is truncated. Responses of
/// any width are accepted silently.
pub fn normalizar_semanas(valores: &[f64]) -> Vec<f64> {
    (0..SEMANAS_POR_CICLO)
        .map(|i| {
            let v = valores.get(i).copied().unwrap_or(0.0);
            if v.is_finite() {
                v
            } else {
                0.0
            }
        })
        .collect()
}

/// One indicator row in the grid.
#[derive(Debug, Clone)]
pub struct LinhaGrade {
    pub indicador: String,
    pub nome: String,
    pub meta: String,
    pub unidade: Unidade,
    pub textos: IndicadorTextos,
    /// Always exactly 12 entries.
    pub semanas: Vec<f64>,
    /// Always exactly 12 entries, positionally aligned with `semanas`.
    pub status_semanal: Vec<Option<StatusSemana>>,
}

impl LinhaGrade {
    pub fn do_esqueleto(linha: LinhaSsi) -> Self {
        Self {
            indicador: linha.indicador,
            nome: linha.nome,
            meta: linha.meta,
            unidade: linha.unidade,
            textos: linha.textos,
            semanas: normalizar_semanas(&linha.semanas),
            status_semanal: vec![None; SEMANAS_POR_CICLO],
        }
    }
}

/// The whole editable matrix plus single-select row state.
#[derive(Debug, Clone, Default)]
pub struct GradeSsi {
    pub linhas: Vec<LinhaGrade>,
    pub selecionada: Option<usize>,
}

impl GradeSsi {
    pub fn do_esqueleto(linhas: Vec<LinhaSsi>) -> Self {
        Self {
            linhas: linhas.into_iter().map(LinhaGrade::do_esqueleto).collect(),
            selecionada: None,
        }
    }

    /// Store the coerced value of raw cell text. Out-of-range indices are
    /// no-ops; the value is always finite (parse failure stores zero).
    /// No range or required-ness validation happens here.
    pub fn editar_celula(&mut self, linha: usize, semana: usize, texto: &str) {
        if semana >= SEMANAS_POR_CICLO {
            return;
        }
        if let Some(l) = self.linhas.get_mut(linha) {
            l.semanas[semana] = coagir_celula(texto);
        }
    }

    /// Single-select; selecting an out-of-range row clears the selection.
    pub fn selecionar(&mut self, linha: usize) {
        self.selecionada = if linha < self.linhas.len() {
            Some(linha)
        } else {
            None
        };
    }

    pub fn linha_selecionada(&self) -> Option<&LinhaGrade> {
        self.selecionada.and_then(|i| self.linhas.get(i))
    }

    /// Serialize the full matrix for the classify call.
    pub fn itens_para_classificar(&self) -> Vec<ItemClassificacao> {
        self.linhas
            .iter()
            .map(|l| ItemClassificacao {
                indicador: l.indicador.clone(),
                semanas: l.semanas.clone(),
            })
            .collect()
    }

    /// Merge a classify response back into the grid, keyed by indicator.
    ///
    /// Rows present in the response take both the server-echoed values
    /// (server is source of truth post-classification) and the returned
    /// statuses. Rows the response omits have their status cleared to
    /// all-`None`: stale status must never be shown for a row the server
    /// did not classify.
    pub fn aplicar_classificacao(&mut self, resposta: Vec<LinhaClassificada>) {
        let por_indicador: HashMap<String, LinhaClassificada> = resposta
            .into_iter()
            .map(|l| (l.indicador.clone(), l))
            .collect();

        for linha in &mut self.linhas {
            match por_indicador.get(&linha.indicador) {
                Some(classificada) => {
                    linha.semanas = normalizar_semanas(&classificada.semanas);
                    linha.status_semanal = normalizar_status(&classificada.status_semanal);
                }
                None => {
                    linha.status_semanal = vec![None; SEMANAS_POR_CICLO];
                }
            }
        }
    }
}

fn normalizar_status(status: &[Option<StatusSemana>]) -> Vec<Option<StatusSemana>> {
    (0..SEMANAS_POR_CICLO)
        .map(|i| status.get(i).copied().flatten())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linha_bruta(indicador: &str, semanas: Vec<f64>) -> LinhaSsi {
        LinhaSsi {
            indicador: indicador.to_string(),
            nome: indicador.to_lowercase(),
            meta: String::new(),
            unidade: Unidade::Numero,
            textos: IndicadorTextos::default(),
            semanas,
        }
    }

    #[test]
    fn test_normaliza_larguras_do_esqueleto() {
        // 0, 5, 12 and 20 week entries all land on exactly 12.
        for largura in [0usize, 5, 12, 20] {
            let valores: Vec<f64> = (0..largura).map(|i| i as f64).collect();
            let grade = GradeSsi::do_esqueleto(vec![linha_bruta("X", valores)]);
            assert_eq!(grade.linhas.len(), 1);
            assert_eq!(grade.linhas[0].semanas.len(), SEMANAS_POR_CICLO);
            assert_eq!(grade.linhas[0].status_semanal.len(), SEMANAS_POR_CICLO);
        }
    }

    #[test]
    fn test_normaliza_preserva_prefixo_e_preenche_com_zero() {
        let saida = normalizar_semanas(&[1.0, 2.0, 3.0]);
        assert_eq!(&saida[..3], &[1.0, 2.0, 3.0]);
        assert!(saida[3..].iter().all(|v| *v == 0.0));

        let longa: Vec<f64> = (0..20).map(|i| i as f64).collect();
        assert_eq!(normalizar_semanas(&longa).len(), SEMANAS_POR_CICLO);

        assert_eq!(normalizar_semanas(&[f64::NAN])[0], 0.0);
    }

    #[test]
    fn test_editar_celula() {
        let mut grade = GradeSsi::do_esqueleto(vec![linha_bruta("X", vec![])]);
        grade.editar_celula(0, 2, "3,5");
        assert_eq!(grade.linhas[0].semanas[2], 3.5);

        grade.editar_celula(0, 2, "abc");
        assert_eq!(grade.linhas[0].semanas[2], 0.0);

        grade.editar_celula(0, 3, "");
        assert_eq!(grade.linhas[0].semanas[3], 0.0);

        // out of range: no-op, no panic
        grade.editar_celula(0, 12, "1");
        grade.editar_celula(9, 0, "1");
    }

    #[test]
    fn test_selecao_unica() {
        let mut grade =
            GradeSsi::do_esqueleto(vec![linha_bruta("A", vec![]), linha_bruta("B", vec![])]);
        grade.selecionar(1);
        assert_eq!(
            grade.linha_selecionada().map(|l| l.indicador.as_str()),
            Some("B")
        );
        grade.selecionar(5);
        assert!(grade.linha_selecionada().is_none());
    }

    #[test]
    fn test_classificacao_sobrescreve_valores_e_status() {
        let mut grade = GradeSsi::do_esqueleto(vec![linha_bruta("A", vec![1.0; 12])]);
        grade.aplicar_classificacao(vec![LinhaClassificada {
            indicador: "A".to_string(),
            semanas: vec![9.0; 12],
            status_semanal: vec![Some(StatusSemana::Otimo); 12],
        }]);
        assert_eq!(grade.linhas[0].semanas, vec![9.0; 12]);
        assert_eq!(grade.linhas[0].status_semanal[0], Some(StatusSemana::Otimo));
    }

    #[test]
    fn test_classificacao_omitida_limpa_status() {
        let mut grade =
            GradeSsi::do_esqueleto(vec![linha_bruta("A", vec![]), linha_bruta("B", vec![])]);
        // first round classifies both
        grade.aplicar_classificacao(vec![
            LinhaClassificada {
                indicador: "A".to_string(),
                semanas: vec![1.0; 12],
                status_semanal: vec![Some(StatusSemana::Bom); 12],
            },
            LinhaClassificada {
                indicador: "B".to_string(),
                semanas: vec![2.0; 12],
                status_semanal: vec![Some(StatusSemana::Ruim); 12],
            },
        ]);
        // second round omits B: its old status must not survive
        grade.aplicar_classificacao(vec![LinhaClassificada {
            indicador: "A".to_string(),
            semanas: vec![1.0; 12],
            status_semanal: vec![Some(StatusSemana::Bom); 12],
        }]);
        assert!(grade.linhas[1].status_semanal.iter().all(Option::is_none));
        // the omitted row keeps its local values
        assert_eq!(grade.linhas[1].semanas, vec![2.0; 12]);
    }

    #[test]
    fn test_classificacao_com_status_curto() {
        let mut grade = GradeSsi::do_esqueleto(vec![linha_bruta("A", vec![])]);
        grade.aplicar_classificacao(vec![LinhaClassificada {
            indicador: "A".to_string(),
            semanas: vec![1.0; 12],
            status_semanal: vec![Some(StatusSemana::Otimo)],
        }]);
        assert_eq!(grade.linhas[0].status_semanal.len(), SEMANAS_POR_CICLO);
        assert_eq!(grade.linhas[0].status_semanal[0], Some(StatusSemana::Otimo));
        assert_eq!(grade.linhas[0].status_semanal[1], None);
    }
}
