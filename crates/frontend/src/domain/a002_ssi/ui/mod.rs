pub mod metas;
pub mod tabela;
