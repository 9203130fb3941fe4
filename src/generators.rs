//! 範囲生成ユーティリティ
//!
//! 等間隔の 1 次元遅延配列を構築するヘルパーです。生成される配列は
//! 段階的な定義（ベースケース → 還元ドメイン上の上書き）で表現され、
//! 数値計算は実体化まで行われません。

use log::debug;

use crate::element::Element;
use crate::expr::Expr;
use crate::func::Func;
use crate::index::Var;
use crate::rdom::RDom;

/// 端点の個数を固定した等間隔列を構築する
///
/// 長さ `r.extent()` の 1 次元配列で、要素 0 は `start`、最終要素は
/// 正確に `stop` になります。内部の要素は
/// `start + i * (stop - start) / (extent - 1)` です。
///
/// 定義は 3 段階です: まず全域に `start`、次に還元ドメイン上で補間式、
/// 最後にインデックス `extent - 1` へ `stop` を強制します。最終段が
/// ないと繰り返しステップの丸め誤差で端点がずれることがあります。
///
/// 前提条件: `extent >= 2`（満たさない場合ステップの除算が退化します。
/// 検証は行いません）。
///
/// # Examples
///
/// ```
/// use lyre::generators::linspace;
/// use lyre::rdom::RDom;
///
/// let r = RDom::new(0, 5, "r");
/// let f = linspace(0.0f64, 10.0, &r, "ls");
/// assert_eq!(f.realize(5).unwrap(), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
/// ```
pub fn linspace<T: Element>(
    start: impl Into<Expr<T>>,
    stop: impl Into<Expr<T>>,
    r: &RDom,
    name: impl Into<String>,
) -> Func<T> {
    let start = start.into();
    let stop = stop.into();
    let name = name.into();
    debug!("linspace `{}` over domain `{}`", name, r.name());

    let step = (stop.clone() - start.clone()) / Expr::index(r.extent() - 1);

    let x = Var::new("x");
    let mut f = Func::new(name, &[x]);
    f.define(start.clone());
    f.define_over(r, start + Expr::index(r) * step);
    // force the exact stop value against floating point drift
    f.define_at(&[r.extent() - 1], stop);
    f
}

/// ステップ幅を固定した半開区間の列を構築する
///
/// `[start, stop)` を `step` 刻みで並べた 1 次元配列で、長さは
/// `ceil((stop - start) / step)` の整数切り捨てです。`stop` は長さの
/// 決定のみに使われ、列自体には含まれません。`linspace` と違い
/// 最終要素の強制はありません。
///
/// # Examples
///
/// ```
/// use lyre::generators::arange;
///
/// let f = arange(0.0f64, 10.0, 2.5, "ar");
/// assert_eq!(f.realize(4).unwrap(), vec![0.0, 2.5, 5.0, 7.5]);
/// ```
pub fn arange<T: Element>(start: T, stop: T, step: T, name: impl Into<String>) -> Func<T> {
    let name = name.into();
    let extent = ((stop - start) / step).ceil().to_index();
    debug!("arange `{}` with extent {}", name, extent);

    let r = RDom::new(0, extent, "r");
    let x = Var::new("x");
    let mut f = Func::new(name, &[x]);
    f.define(start);
    f.define_over(&r, Expr::from(start) + Expr::index(&r) * step);
    f
}
