//! Metas editor model.
//!
//! The visible rows are the fixed client-side catalog; the backend only
//! hydrates saved `valorMeta`/`unidade` into this template. Saving builds
//! a batch of the rows that parse to a finite number; blank or
//! unparsable rows are silently dropped from the payload rather than
//! rejected, and an all-blank form is refused before any request.

use contracts::domain::metas::{MetaIndicador, MetasLoteRequest};
use contracts::domain::ssi::catalogo::{DefinicaoIndicador, CATALOGO};
use contracts::domain::ssi::Unidade;

use crate::shared::error::ApiError;
use crate::shared::numeric::{formatar_decimal, parse_valor_meta};

/// One editable row of the metas form.
#[derive(Debug, Clone)]
pub struct LinhaMeta {
    pub definicao: &'static DefinicaoIndicador,
    pub unidade: Unidade,
    /// Raw input text; kept as typed so partial edits survive re-renders.
    pub valor_texto: String,
}

/// The full form template in catalog order, before hydration.
pub fn modelo_inicial() -> Vec<LinhaMeta> {
    CATALOGO
        .iter()
        .map(|definicao| LinhaMeta {
            definicao,
            unidade: definicao.unidade,
            valor_texto: String::new(),
        })
        .collect()
}

/// Merge saved metas into the template. Metrics the backend does not
/// know stay blank; saved metrics outside the catalog are ignored.
pub fn hidratar(linhas: &mut [LinhaMeta], salvas: Vec<MetaIndicador>) {
    for salva in salvas {
        if let Some(linha) = linhas
            .iter_mut()
            .find(|l| l.definicao.metrica == salva.metrica)
        {
            linha.unidade = salva.unidade;
            linha.valor_texto = formatar_decimal(salva.valor_meta);
        }
    }
}

/// Build the batch payload. Only rows whose value parses finite are
/// included; zero parsable rows is a client-side validation error and no
/// request may be sent.
pub fn montar_lote(linhas: &[LinhaMeta], recalcular: bool) -> Result<MetasLoteRequest, ApiError> {
    let itens: Vec<MetaIndicador> = linhas
        .iter()
        .filter_map(|linha| {
            parse_valor_meta(&linha.valor_texto).map(|valor_meta| MetaIndicador {
                metrica: linha.definicao.metrica.to_string(),
                unidade: linha.unidade,
                valor_meta,
            })
        })
        .collect();

    if itens.is_empty() {
        return Err(ApiError::Validacao("Informe ao menos uma meta".to_string()));
    }

    Ok(MetasLoteRequest { itens, recalcular })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn com_valores(valores: &[(&str, &str)]) -> Vec<LinhaMeta> {
        let mut linhas = modelo_inicial();
        for (metrica, texto) in valores {
            let linha = linhas
                .iter_mut()
                .find(|l| l.definicao.metrica == *metrica)
                .unwrap();
            linha.valor_texto = texto.to_string();
        }
        linhas
    }

    #[test]
    fn test_modelo_segue_o_catalogo() {
        let linhas = modelo_inicial();
        assert_eq!(linhas.len(), CATALOGO.len());
        assert!(linhas.iter().all(|l| l.valor_texto.is_empty()));
    }

    #[test]
    fn test_lote_descarta_linhas_em_branco() {
        let linhas = com_valores(&[("SSI_GERAL", "10"), ("SSI_SETOR", "")]);
        let lote = montar_lote(&linhas, false).unwrap();
        assert_eq!(lote.itens.len(), 1);
        assert_eq!(lote.itens[0].metrica, "SSI_GERAL");
        assert_eq!(lote.itens[0].valor_meta, 10.0);
    }

    #[test]
    fn test_lote_descarta_nao_numericas() {
        let linhas = com_valores(&[("SSI_GERAL", "dez"), ("CAFES_AGENDADOS", "2,5")]);
        let lote = montar_lote(&linhas, true).unwrap();
        assert_eq!(lote.itens.len(), 1);
        assert_eq!(lote.itens[0].metrica, "CAFES_AGENDADOS");
        assert_eq!(lote.itens[0].valor_meta, 2.5);
        assert!(lote.recalcular);
    }

    #[test]
    fn test_lote_vazio_e_erro_de_validacao() {
        // No request may leave the client; the rejection carries the
        // client-side variant of the taxonomy.
        let linhas = modelo_inicial();
        assert!(matches!(
            montar_lote(&linhas, false),
            Err(ApiError::Validacao(_))
        ));
    }

    #[test]
    fn test_hidratar() {
        let mut linhas = modelo_inicial();
        hidratar(
            &mut linhas,
            vec![
                MetaIndicador {
                    metrica: "SSI_SETOR".to_string(),
                    unidade: Unidade::Percentual,
                    valor_meta: 12.5,
                },
                MetaIndicador {
                    metrica: "FORA_DO_CATALOGO".to_string(),
                    unidade: Unidade::Numero,
                    valor_meta: 1.0,
                },
            ],
        );
        let linha = linhas
            .iter()
            .find(|l| l.definicao.metrica == "SSI_SETOR")
            .unwrap();
        assert_eq!(linha.valor_texto, "12.5");
        assert_eq!(linha.unidade, Unidade::Percentual);
        // unknown metric was ignored, row count unchanged
        assert_eq!(linhas.len(), CATALOGO.len());
    }

    #[test]
    fn test_hidratar_inteiro_sem_casa_decimal() {
        let mut linhas = modelo_inicial();
        hidratar(
            &mut linhas,
            vec![MetaIndicador {
                metrica: "SSI_GERAL".to_string(),
                unidade: Unidade::Numero,
                valor_meta: 40.0,
            }],
        );
        let linha = linhas
            .iter()
            .find(|l| l.definicao.metrica == "SSI_GERAL")
            .unwrap();
        assert_eq!(linha.valor_texto, "40");
    }
}
