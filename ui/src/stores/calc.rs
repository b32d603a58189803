use serde::Serialize;

use super::StoreError;

/// Display and operator state of the calculator panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CalcStore {
    /// Accumulated result, `None` before the first operator.
    pub res: Option<f64>,
    /// Digits currently typed.
    pub cur: String,
    /// Pending operator symbol.
    pub op: String,
    pub clear: bool,
    pub overwrite: bool,
    pub loading: bool,
    pub more_funds: bool,
    pub error: Option<StoreError>,
    pub text: String,
}

impl CalcStore {
    pub fn reset(&mut self) {
        *self = Self::default();
        dioxus_logger::tracing::debug!("calc: reset");
    }

    /// Clears the display and operator state, leaving request state
    /// (`loading`, `more_funds`, `error`, `text`) untouched.
    pub fn clear_calc(&mut self) {
        self.cur.clear();
        self.res = None;
        self.op.clear();
        self.clear = false;
        self.overwrite = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn busy() -> CalcStore {
        CalcStore {
            res: Some(12.0),
            cur: "3".to_string(),
            op: "+".to_string(),
            clear: true,
            overwrite: true,
            loading: true,
            more_funds: true,
            error: Some(StoreError::new("not enough funds")),
            text: "12 + 3".to_string(),
        }
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut calc = busy();
        calc.reset();
        assert_eq!(calc, CalcStore::default());
        assert_eq!(calc.error, None);
    }

    #[test]
    fn clear_calc_only_touches_display() {
        let mut calc = busy();
        calc.clear_calc();

        assert_eq!(calc.res, None);
        assert_eq!(calc.cur, "");
        assert_eq!(calc.op, "");
        assert!(!calc.clear);
        assert!(!calc.overwrite);

        assert!(calc.loading);
        assert!(calc.more_funds);
        assert_eq!(calc.error, Some(StoreError::new("not enough funds")));
        assert_eq!(calc.text, "12 + 3");
    }
}
