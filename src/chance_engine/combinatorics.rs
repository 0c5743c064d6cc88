//! Binomial coefficients and bounded power-set enumeration.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};

use tracing::trace;

use crate::chance_engine::{
    config::{DEFAULT_MAX_BINOMIAL_N, DEFAULT_MAX_SURPLUS_TOKENS},
    error::{ChanceError, Result},
};

// ---------------------------------------------------------------------------
// Binomial coefficients
// ---------------------------------------------------------------------------

/// Pascal's triangle, grown on demand and never shrunk.
///
/// Row `n` holds `C(n, 0..=n)` as `f64`. Lookups share a read lock; growing
/// the triangle takes the write lock, so one cache can back any number of
/// threads. Rows are only ever appended whole, which keeps the table usable
/// even if a writer panicked mid-extension.
#[derive(Debug)]
pub struct BinomialCache {
    rows: RwLock<Vec<Vec<f64>>>,
    /// `ln(i!)` for `i` in `0..len`, for coefficients too large for `f64`.
    ln_factorials: RwLock<Vec<f64>>,
    max_n: u64,
}

impl Default for BinomialCache {
    fn default() -> Self {
        BinomialCache::new(DEFAULT_MAX_BINOMIAL_N)
    }
}

impl BinomialCache {
    /// Empty cache (row 0 only) that refuses to grow past `max_n`.
    pub fn new(max_n: u64) -> Self {
        BinomialCache {
            rows: RwLock::new(vec![vec![1.0]]),
            ln_factorials: RwLock::new(vec![0.0]),
            max_n,
        }
    }

    pub fn max_n(&self) -> u64 {
        self.max_n
    }

    /// Number of triangle rows currently materialised.
    pub fn rows(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// `C(n, k)`: zero when `k > n`, an error for negative inputs or `n`
    /// beyond the configured ceiling.
    ///
    /// Coefficients above `f64::MAX` (from about `n = 1030`) come back as
    /// infinity; use [`BinomialCache::ln_choose`] for those.
    pub fn choose(&self, n: i64, k: i64) -> Result<f64> {
        let Some((n, k)) = self.check_args(n, k)? else {
            return Ok(0.0);
        };

        {
            let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(row) = rows.get(n) {
                return Ok(row[k]);
            }
        }

        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        // Another writer may have grown the table while we waited.
        if rows.len() <= n {
            extend_triangle(&mut rows, n);
        }
        Ok(rows[n][k])
    }

    /// `ln C(n, k)`, finite for every `n` up to the ceiling. Impossible
    /// selections (`k > n`) give negative infinity.
    pub fn ln_choose(&self, n: i64, k: i64) -> Result<f64> {
        let Some((n, k)) = self.check_args(n, k)? else {
            return Ok(f64::NEG_INFINITY);
        };

        {
            let table = self.ln_factorials.read().unwrap_or_else(PoisonError::into_inner);
            if n < table.len() {
                return Ok(table[n] - table[k] - table[n - k]);
            }
        }

        let mut table = self.ln_factorials.write().unwrap_or_else(PoisonError::into_inner);
        while table.len() <= n {
            let i = table.len();
            let next = table[i - 1] + (i as f64).ln();
            table.push(next);
        }
        Ok(table[n] - table[k] - table[n - k])
    }

    /// Shared argument rules. `None` means `k > n`.
    fn check_args(&self, n: i64, k: i64) -> Result<Option<(usize, usize)>> {
        if n < 0 || k < 0 {
            return Err(ChanceError::invalid(format!(
                "choose({n}, {k}): please use non-negative numbers"
            )));
        }
        if k > n {
            return Ok(None);
        }
        if (n as u64) > self.max_n {
            return Err(ChanceError::limit(format!(
                "choose({n}, {k}): n is larger than the supported maximum of {}",
                self.max_n
            )));
        }
        Ok(Some((n as usize, k as usize)))
    }
}

/// Append rows until row `n` exists, using `C(i,j) = C(i-1,j-1) + C(i-1,j)`.
fn extend_triangle(rows: &mut Vec<Vec<f64>>, n: usize) {
    let before = rows.len();
    rows.reserve(n + 1 - before);
    while rows.len() <= n {
        let i = rows.len();
        let prev = &rows[i - 1];
        let mut row = Vec::with_capacity(i + 1);
        row.push(1.0);
        for j in 1..i {
            row.push(prev[j - 1] + prev[j]);
        }
        row.push(1.0);
        rows.push(row);
    }
    trace!(before, after = rows.len(), "extended binomial cache");
}

// ---------------------------------------------------------------------------
// Power sets
// ---------------------------------------------------------------------------

/// [`powerset_with_ceiling`] with the default ceiling of 26 elements.
pub fn powerset<T>(elements: &[T], max_subset_size: usize) -> Result<Vec<Vec<T>>>
where
    T: Clone + Eq + Hash,
{
    powerset_with_ceiling(elements, max_subset_size, DEFAULT_MAX_SURPLUS_TOKENS)
}

/// Every subset of `elements` with at most `max_subset_size` members, keeping
/// relative order and collapsing subsets that are equal element-by-element.
///
/// The empty subset always comes first. When more than singletons are wanted,
/// inputs longer than `ceiling` are refused: the subset space is `2^n`.
pub fn powerset_with_ceiling<T>(
    elements: &[T],
    max_subset_size: usize,
    ceiling: usize,
) -> Result<Vec<Vec<T>>>
where
    T: Clone + Eq + Hash,
{
    let mut subsets: Vec<Vec<T>> = vec![Vec::new()];
    if max_subset_size == 0 {
        return Ok(subsets);
    }
    if max_subset_size > 1 && elements.len() > ceiling {
        return Err(ChanceError::limit(format!(
            "this would require processing a very large power set (2^{} elements)",
            elements.len()
        )));
    }

    // Duplicates are dropped as they appear; the surviving twin is extended
    // identically, so the final set matches a dedup-after-generation pass.
    let mut seen: HashSet<Vec<T>> = HashSet::new();
    seen.insert(Vec::new());

    for element in elements {
        for j in 0..subsets.len() {
            if subsets[j].len() >= max_subset_size {
                continue;
            }
            let mut candidate = subsets[j].clone();
            candidate.push(element.clone());
            if !seen.contains(&candidate) {
                seen.insert(candidate.clone());
                subsets.push(candidate);
            }
        }
    }
    Ok(subsets)
}
