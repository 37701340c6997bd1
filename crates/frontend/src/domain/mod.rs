pub mod a001_mentorado;
pub mod a002_ssi;
pub mod a003_vaga_link;
pub mod a004_agente;
