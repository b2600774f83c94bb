//! Dynamic time warping over an implicit cost grid.
//!
//! The grid has shape `(n, m)` and is never materialized: cells are read
//! through an accessor `dist(a, b)`. A warping path runs from `(0, 0)` to
//! `(n−1, m−1)`, each step advancing `a`, `b` or both by exactly one. Its cost
//! is the sum of all visited cells, endpoints included. An empty shape has
//! the empty path and cost 0.
//!
//! Recurrence: `D(a, b) = dist(a, b) + min(D(a−1, b), D(a, b−1), D(a−1, b−1))`.

/// One step of a warping path: index `a` in the first sequence is matched to
/// index `b` in the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WarpStep {
    pub a: usize,
    pub b: usize,
}

/// Optimal warping: total cost plus the path that realizes it.
#[derive(Clone, Debug, PartialEq)]
pub struct Warp {
    pub cost: f64,
    pub path: Vec<WarpStep>,
}

/// Minimum warping cost using two rolling rows (`O(m)` memory).
pub fn dtw_cost<F>(shape: (usize, usize), dist: F) -> f64
where
    F: Fn(usize, usize) -> f64,
{
    let (n, m) = shape;
    if n == 0 || m == 0 {
        return 0.0;
    }
    let mut prev = vec![0.0f64; m];
    let mut cur = vec![0.0f64; m];
    prev[0] = dist(0, 0);
    for b in 1..m {
        prev[b] = prev[b - 1] + dist(0, b);
    }
    for a in 1..n {
        cur[0] = prev[0] + dist(a, 0);
        for b in 1..m {
            let best = prev[b - 1].min(prev[b]).min(cur[b - 1]);
            cur[b] = best + dist(a, b);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[m - 1]
}

/// Minimum warping cost and an optimal path (full `O(nm)` table).
///
/// Ties during backtracking prefer the diagonal step, then advancing `a`.
pub fn dtw<F>(shape: (usize, usize), dist: F) -> Warp
where
    F: Fn(usize, usize) -> f64,
{
    let (n, m) = shape;
    if n == 0 || m == 0 {
        return Warp {
            cost: 0.0,
            path: Vec::new(),
        };
    }
    let idx = |a: usize, b: usize| a * m + b;
    let mut acc = vec![0.0f64; n * m];
    for a in 0..n {
        for b in 0..m {
            let best = match (a, b) {
                (0, 0) => 0.0,
                (0, _) => acc[idx(0, b - 1)],
                (_, 0) => acc[idx(a - 1, 0)],
                _ => acc[idx(a - 1, b - 1)]
                    .min(acc[idx(a - 1, b)])
                    .min(acc[idx(a, b - 1)]),
            };
            acc[idx(a, b)] = best + dist(a, b);
        }
    }

    let mut path = Vec::with_capacity(n + m - 1);
    let (mut a, mut b) = (n - 1, m - 1);
    path.push(WarpStep { a, b });
    while a > 0 || b > 0 {
        (a, b) = match (a, b) {
            (0, _) => (0, b - 1),
            (_, 0) => (a - 1, 0),
            _ => {
                let diag = acc[idx(a - 1, b - 1)];
                let up = acc[idx(a - 1, b)];
                let left = acc[idx(a, b - 1)];
                if diag <= up && diag <= left {
                    (a - 1, b - 1)
                } else if up <= left {
                    (a - 1, b)
                } else {
                    (a, b - 1)
                }
            }
        };
        path.push(WarpStep { a, b });
    }
    path.reverse();
    Warp {
        cost: acc[idx(n - 1, m - 1)],
        path,
    }
}
