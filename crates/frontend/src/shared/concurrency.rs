//! Bounded concurrent fan-out over a list of items.

use std::future::Future;

use futures::stream::{self, StreamExt};

/// Apply `f` to every item with at most `limite` calls in flight at once.
/// Results come back in input order. A `limite` of zero is treated as 1.
pub async fn map_com_concorrencia<T, R, F, Fut>(itens: Vec<T>, limite: usize, f: F) -> Vec<R>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = R>,
{
    stream::iter(itens.into_iter().map(f))
        .buffered(limite.max(1))
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    /// Future that pends once before resolving, so several instances can
    /// be observed in flight at the same time.
    struct DoisPassos {
        pendeu: bool,
        valor: u32,
        ativos: Rc<Cell<usize>>,
        pico: Rc<Cell<usize>>,
    }

    impl Future for DoisPassos {
        type Output = u32;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<u32> {
            if !self.pendeu {
                self.pendeu = true;
                self.ativos.set(self.ativos.get() + 1);
                self.pico.set(self.pico.get().max(self.ativos.get()));
                cx.waker().wake_by_ref();
                return Poll::Pending;
            }
            self.ativos.set(self.ativos.get() - 1);
            Poll::Ready(self.valor * 10)
        }
    }

    #[test]
    fn test_preserva_ordem() {
        let ativos = Rc::new(Cell::new(0));
        let pico = Rc::new(Cell::new(0));
        let saida = futures::executor::block_on(map_com_concorrencia(
            vec![1u32, 2, 3, 4, 5],
            2,
            |v| DoisPassos {
                pendeu: false,
                valor: v,
                ativos: ativos.clone(),
                pico: pico.clone(),
            },
        ));
        assert_eq!(saida, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_respeita_limite() {
        let ativos = Rc::new(Cell::new(0));
        let pico = Rc::new(Cell::new(0));
        futures::executor::block_on(map_com_concorrencia(
            (0u32..8).collect::<Vec<_>>(),
            3,
            |v| DoisPassos {
                pendeu: false,
                valor: v,
                ativos: ativos.clone(),
                pico: pico.clone(),
            },
        ));
        assert!(pico.get() <= 3, "pico {} acima do limite", pico.get());
        assert!(pico.get() >= 2, "fan-out não aconteceu");
    }

    #[test]
    fn test_limite_zero_vira_um() {
        let saida = futures::executor::block_on(map_com_concorrencia(
            vec![7u32],
            0,
            |v| async move { v + 1 },
        ));
        assert_eq!(saida, vec![8]);
    }

    #[test]
    fn test_lista_vazia() {
        let saida: Vec<u32> = futures::executor::block_on(map_com_concorrencia(
            Vec::<u32>::new(),
            4,
            |v| async move { v },
        ));
        assert!(saida.is_empty());
    }
}
