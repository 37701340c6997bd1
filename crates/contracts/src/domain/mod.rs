pub mod agentes;
pub mod mentorado;
pub mod metas;
pub mod ssi;
pub mod vagas;
