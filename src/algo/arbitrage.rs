use crate::matrix::Matrix;
use itertools::iproduct;
use log::debug;

/// Whether some cycle of conversions, starting from currency `0`, compounds to
/// more than it started with.
///
/// `rates[(u, v)]` is the amount of `v` bought by one unit of `u`; `0.0` means
/// the pair cannot be traded. All arcs are relaxed once from the source, then
/// any arc that still improves a best product reveals a profitable cycle.
pub fn has_arbitrage(rates: &Matrix<f64>) -> bool {
    let n = rates.order();
    if n == 0 {
        return false;
    }
    let mut best = rates.row(0).to_vec();
    best[0] = 1.0;
    for (u, v) in iproduct!(0..n, 0..n) {
        let rate = rates[(u, v)];
        if rate != 0.0 && best[u] * rate > best[v] {
            best[v] = best[u] * rate;
        }
    }
    debug!("best products: {:?}", best);
    iproduct!(0..n, 0..n).any(|(u, v)| {
        let rate = rates[(u, v)];
        rate != 0.0 && best[u] * rate > best[v]
    })
}
