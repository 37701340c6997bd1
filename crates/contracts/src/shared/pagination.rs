//! Pagination envelope used by every list endpoint.

use serde::{Deserialize, Serialize};

/// A single page of results plus the total item count across all pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagina<T> {
    pub itens: Vec<T>,
    pub total: u64,
}

/// Query parameters for a paginated list. Pages are 1-based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParamsPagina {
    pub pagina: u32,
    pub tamanho: u32,
}

impl ParamsPagina {
    pub fn new(pagina: u32, tamanho: u32) -> Self {
        Self { pagina, tamanho }
    }

    /// Total number of pages for `total` items with this page size.
    pub fn total_paginas(&self, total: u64) -> u32 {
        if self.tamanho == 0 {
            return 0;
        }
        total.div_ceil(self.tamanho as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_paginas() {
        let p = ParamsPagina::new(1, 20);
        assert_eq!(p.total_paginas(0), 0);
        assert_eq!(p.total_paginas(20), 1);
        assert_eq!(p.total_paginas(21), 2);
    }

    #[test]
    fn test_pagina_parse() {
        let json = r#"{"itens":[1,2,3],"total":7}"#;
        let pagina: Pagina<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(pagina.itens.len(), 3);
        assert_eq!(pagina.total, 7);
    }
}
