//! Abort-on-unmount plumbing.
//!
//! Every data-fetching page owns an [`EscopoPagina`] tied to its mount
//! lifetime: in-flight requests carry its `AbortSignal`, and any response
//! that still arrives after the page unmounted is discarded via the
//! liveness flag instead of being applied to state.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::on_cleanup;
use web_sys::{AbortController, AbortSignal};

/// Shared liveness flag. Cheap to clone into async blocks; released
/// exactly once when the owning view unmounts.
#[derive(Clone, Debug)]
pub struct Vida {
    vivo: Rc<Cell<bool>>,
}

impl Vida {
    pub fn nova() -> Self {
        Self {
            vivo: Rc::new(Cell::new(true)),
        }
    }

    pub fn esta_viva(&self) -> bool {
        self.vivo.get()
    }

    pub fn encerrar(&self) {
        self.vivo.set(false);
    }
}

/// Mount-scoped cancellation: an `AbortController` plus a [`Vida`] flag,
/// both released by `on_cleanup`.
#[derive(Clone)]
pub struct EscopoPagina {
    vida: Vida,
    controlador: Rc<AbortController>,
}

impl EscopoPagina {
    /// Create the scope inside a component body. Registers the cleanup
    /// hook with the current reactive owner.
    pub fn montar() -> Self {
        let controlador =
            Rc::new(AbortController::new().expect("AbortController not available"));
        let escopo = Self {
            vida: Vida::nova(),
            controlador,
        };

        let limpeza = send_wrapper::SendWrapper::new(escopo.clone());
        on_cleanup(move || {
            limpeza.vida.encerrar();
            limpeza.controlador.abort();
        });

        escopo
    }

    /// Signal to attach to outgoing requests.
    pub fn sinal(&self) -> AbortSignal {
        self.controlador.signal()
    }

    /// True while the owning view is still mounted. Check this before
    /// applying any response to signals.
    pub fn esta_viva(&self) -> bool {
        self.vida.esta_viva()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::pin::pin;
    use std::task::Context;

    use futures::task::noop_waker;

    /// Drives a request-shaped future by hand: first poll leaves it in
    /// flight, the flag is released in between, second poll delivers the
    /// response. The handler must observe the released flag and skip the
    /// state write.
    #[test]
    fn test_resposta_tardia_nao_escreve() {
        let vida = Vida::nova();
        let no_handler = vida.clone();
        let escrito = Rc::new(Cell::new(false));
        let destino = escrito.clone();

        let mut fut = pin!(async move {
            futures::pending!();
            if no_handler.esta_viva() {
                destino.set(true);
            }
        });
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        assert!(fut.as_mut().poll(&mut cx).is_pending());
        // unmount while the request is still in flight
        vida.encerrar();
        assert!(fut.as_mut().poll(&mut cx).is_ready());
        assert!(!escrito.get());
    }

    #[test]
    fn test_resposta_com_escopo_vivo_escreve() {
        let vida = Vida::nova();
        let no_handler = vida.clone();
        let escrito = Rc::new(Cell::new(false));
        let destino = escrito.clone();

        let mut fut = pin!(async move {
            futures::pending!();
            if no_handler.esta_viva() {
                destino.set(true);
            }
        });
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        assert!(fut.as_mut().poll(&mut cx).is_pending());
        assert!(fut.as_mut().poll(&mut cx).is_ready());
        assert!(escrito.get());
    }

    #[test]
    fn test_encerrar_e_idempotente() {
        let vida = Vida::nova();
        vida.encerrar();
        vida.encerrar();
        assert!(!vida.esta_viva());
    }
}
