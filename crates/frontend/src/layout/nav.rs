//! In-app navigation state. One page is visible at a time; the sidebar
//! switches the active route through a shared signal.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rota {
    #[default]
    Mentorados,
    GradeSsi,
    Metas,
    Vagas,
    Chat,
}

impl Rota {
    pub fn titulo(&self) -> &'static str {
        match self {
            Rota::Mentorados => "Mentorados",
            Rota::GradeSsi => "Indicadores SSI",
            Rota::Metas => "Metas",
            Rota::Vagas => "Vagas",
            Rota::Chat => "Agentes",
        }
    }

    pub fn icone(&self) -> &'static str {
        match self {
            Rota::Mentorados => "mentorados",
            Rota::GradeSsi => "ssi",
            Rota::Metas => "metas",
            Rota::Vagas => "vagas",
            Rota::Chat => "chat",
        }
    }

    pub const TODAS: [Rota; 5] = [
        Rota::Mentorados,
        Rota::GradeSsi,
        Rota::Metas,
        Rota::Vagas,
        Rota::Chat,
    ];
}

#[derive(Clone, Copy)]
pub struct NavService {
    pub rota: RwSignal<Rota>,
}

impl NavService {
    pub fn new() -> Self {
        Self {
            rota: RwSignal::new(Rota::default()),
        }
    }

    pub fn ir_para(&self, rota: Rota) {
        self.rota.set(rota);
    }
}

impl Default for NavService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_nav() -> NavService {
    use_context::<NavService>().expect("NavService not found in component tree")
}
