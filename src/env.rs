//! 評価環境
//!
//! インデックス変数名から具体的な整数値へのバインディングを保持します。
//! 純粋変数・還元変数・シンボリックなサイズ変数はすべて同じ名前空間で
//! 解決されます。

use rustc_hash::FxHashMap;

/// インデックス変数のバインディング集合
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: FxHashMap<String, i64>,
}

impl Env {
    /// 空の環境を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 変数をバインドする（既存のバインディングは上書き）
    pub fn bind(&mut self, name: impl Into<String>, value: i64) {
        self.vars.insert(name.into(), value);
    }

    /// ビルダー形式で変数をバインドする
    ///
    /// # Examples
    ///
    /// ```
    /// use lyre::env::Env;
    ///
    /// let env = Env::new().with("n", 5).with("x", 2);
    /// assert_eq!(env.get("n"), Some(5));
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: i64) -> Self {
        self.bind(name, value);
        self
    }

    /// バインディングを取得
    pub fn get(&self, name: &str) -> Option<i64> {
        self.vars.get(name).copied()
    }
}
