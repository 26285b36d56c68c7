//! Screener condition model and boolean-expression serialization.
//!
//! A screen is an ordered list of conditions, each a comparison over one
//! backend field. Execution serializes the list into the nested
//! operator/operands expression the backend's query engine expects and posts
//! it to `/query-builder/execute/{type}`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::{Value, json};

/// Which catalog a screen runs against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryType {
    #[default]
    Equity,
    Fund,
}

impl QueryType {
    /// Wire value for the `query_type` parameter and execute path.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Equity => "equity",
            QueryType::Fund => "fund",
        }
    }

    /// Toggles between the two catalogs.
    pub fn toggle(&mut self) {
        *self = match self {
            QueryType::Equity => QueryType::Fund,
            QueryType::Fund => QueryType::Equity,
        };
    }
}

/// Comparison operator of one condition. `Btwn` is the only range operator
/// and takes two operand values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
    Btwn,
}

impl CmpOp {
    /// Wire-format operator name expected by the backend.
    pub fn wire(&self) -> &'static str {
        match self {
            CmpOp::Gt => "GT",
            CmpOp::Gte => "GTE",
            CmpOp::Lt => "LT",
            CmpOp::Lte => "LTE",
            CmpOp::Eq => "EQ",
            CmpOp::Btwn => "BTWN",
        }
    }

    /// Symbol used when displaying and parsing conditions.
    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Gt => ">",
            CmpOp::Gte => ">=",
            CmpOp::Lt => "<",
            CmpOp::Lte => "<=",
            CmpOp::Eq => "=",
            CmpOp::Btwn => "btwn",
        }
    }

    /// Whether the operator takes two operand values.
    pub fn is_range(&self) -> bool {
        matches!(self, CmpOp::Btwn)
    }

    /// Parses an operator token, accepting symbols and wire names.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            ">" | "gt" => Some(CmpOp::Gt),
            ">=" | "gte" => Some(CmpOp::Gte),
            "<" | "lt" => Some(CmpOp::Lt),
            "<=" | "lte" => Some(CmpOp::Lte),
            "=" | "==" | "eq" => Some(CmpOp::Eq),
            "btwn" | "between" => Some(CmpOp::Btwn),
            _ => None,
        }
    }
}

/// A condition operand: numeric for most fields, text for restricted-value
/// fields like `sector` or `exchange`.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Num(f64),
    Text(String),
}

impl Operand {
    /// Parses a token: numbers become numeric, everything else text with
    /// surrounding quotes stripped.
    pub fn parse(token: &str) -> Self {
        if let Ok(n) = token.parse::<f64>() {
            Operand::Num(n)
        } else {
            Operand::Text(
                token
                    .trim_matches(|c| c == '\'' || c == '"')
                    .to_string(),
            )
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Operand::Num(n) => json!(n),
            Operand::Text(s) => json!(s),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Num(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Operand::Num(n) => write!(f, "{n}"),
            Operand::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One screening condition: `(operator, field, one or two operands)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub field: String,
    pub op: CmpOp,
    pub value: Operand,
    /// Upper bound, present only for range operators.
    pub value2: Option<Operand>,
}

impl Condition {
    /// Parses a condition line of the form `field op value [value2]`,
    /// e.g. `marketCap > 1000000000` or `trailingPE btwn 5 20`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let field = parts
            .next()
            .ok_or_else(|| "expected: field op value [value2]".to_string())?
            .to_string();
        let op_token = parts
            .next()
            .ok_or_else(|| format!("missing operator after {field:?}"))?;
        let op = CmpOp::parse(op_token)
            .ok_or_else(|| format!("unknown operator {op_token:?}"))?;
        let value = Operand::parse(
            parts
                .next()
                .ok_or_else(|| format!("missing value for {field:?}"))?,
        );

        let value2 = if op.is_range() {
            Some(Operand::parse(parts.next().ok_or_else(|| {
                format!("{} needs two values", op.symbol())
            })?))
        } else {
            None
        };

        if parts.next().is_some() {
            return Err("trailing tokens after condition".to_string());
        }
        Ok(Condition {
            field,
            op,
            value,
            value2,
        })
    }

    /// Serializes into one `{operator, operands}` expression node.
    pub fn to_node(&self) -> Value {
        let mut operands = vec![json!(self.field), self.value.to_value()];
        if let Some(upper) = &self.value2 {
            operands.push(upper.to_value());
        }
        json!({ "operator": self.op.wire(), "operands": operands })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op.symbol(), self.value)?;
        if let Some(upper) = &self.value2 {
            write!(f, " {upper}")?;
        }
        Ok(())
    }
}

/// Serializes a condition list into the expression posted to the backend.
///
/// Several conditions combine under a top-level AND; a single condition is
/// posted bare because the backend rejects one-operand AND nodes.
pub fn build_query(conditions: &[Condition]) -> Value {
    match conditions {
        [only] => only.to_node(),
        many => json!({
            "operator": "AND",
            "operands": many.iter().map(Condition::to_node).collect::<Vec<_>>(),
        }),
    }
}

/// `/query-builder/fields` payload: field names grouped by category.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FieldCatalog {
    #[serde(default)]
    pub query_type: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub timestamp: String,
}

/// `/query-builder/values` payload: restricted values per field.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ValueCatalog {
    #[serde(default)]
    pub query_type: String,
    #[serde(default)]
    pub values: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub timestamp: String,
}

/// Result of executing a screen.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ScreenerResult {
    /// Echo of the executed query expression.
    #[serde(default)]
    pub query: Value,
    #[serde(default)]
    pub results: Vec<serde_json::Map<String, Value>>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_comparison() {
        let c = Condition::parse("marketCap > 1000000000").unwrap();
        assert_eq!(c.field, "marketCap");
        assert_eq!(c.op, CmpOp::Gt);
        assert_eq!(c.value, Operand::Num(1_000_000_000.0));
        assert!(c.value2.is_none());
    }

    #[test]
    fn parse_range() {
        let c = Condition::parse("trailingPE btwn 5 20").unwrap();
        assert_eq!(c.op, CmpOp::Btwn);
        assert_eq!(c.value, Operand::Num(5.0));
        assert_eq!(c.value2, Some(Operand::Num(20.0)));
    }

    #[test]
    fn parse_text_operand() {
        let c = Condition::parse("sector = Technology").unwrap();
        assert_eq!(c.value, Operand::Text("Technology".to_string()));
    }

    #[test]
    fn parse_rejects_missing_range_bound() {
        assert!(Condition::parse("trailingPE btwn 5").is_err());
    }

    #[test]
    fn parse_rejects_unknown_operator() {
        assert!(Condition::parse("marketCap ~ 5").is_err());
    }

    #[test]
    fn parse_rejects_trailing_tokens() {
        assert!(Condition::parse("marketCap > 5 extra").is_err());
    }

    #[test]
    fn single_condition_posted_bare() {
        let c = Condition::parse("marketCap > 10").unwrap();
        let query = build_query(std::slice::from_ref(&c));
        assert_eq!(query["operator"], "GT");
        assert_eq!(query["operands"][0], "marketCap");
    }

    #[test]
    fn multiple_conditions_wrapped_in_and() {
        let conditions = vec![
            Condition::parse("marketCap > 10").unwrap(),
            Condition::parse("sector = Technology").unwrap(),
        ];
        let query = build_query(&conditions);
        assert_eq!(query["operator"], "AND");
        assert_eq!(query["operands"].as_array().unwrap().len(), 2);
        assert_eq!(query["operands"][1]["operator"], "EQ");
    }

    #[test]
    fn range_node_has_three_operands() {
        let c = Condition::parse("trailingPE btwn 5 20").unwrap();
        let node = c.to_node();
        assert_eq!(node["operands"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn condition_display_round_trips() {
        let c = Condition::parse("trailingPE btwn 5 20").unwrap();
        assert_eq!(Condition::parse(&c.to_string()).unwrap(), c);
    }
}
