use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Deserializer;

///
/// An expectation's index selector: a single integer or a list of integers.
/// The sentinel `-1` matches any index in its dimension.
///
#[derive(Debug, Clone)]
pub enum IndexSelector {
    /// A single index.
    Single(i64),
    /// A list of indexes.
    Multiple(Vec<i64>),
}

impl IndexSelector {
    ///
    /// Flattens the selector into a set of indexes.
    ///
    pub fn to_set(&self) -> BTreeSet<i64> {
        match self {
            Self::Single(index) => std::iter::once(*index).collect(),
            Self::Multiple(indexes) => indexes.iter().copied().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for IndexSelector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(number) => {
                number.as_i64().map(Self::Single).ok_or_else(|| {
                    serde::de::Error::custom(format!("expected an integer index, found `{number}`"))
                })
            }
            serde_json::Value::Array(values) => values
                .into_iter()
                .map(|value| {
                    value.as_i64().ok_or_else(|| {
                        serde::de::Error::custom(format!(
                            "expected an integer index, found `{value}`"
                        ))
                    })
                })
                .collect::<Result<Vec<i64>, D::Error>>()
                .map(Self::Multiple),
            value => Err(serde::de::Error::custom(format!(
                "indexes must be an integer or an array of integers, found `{value}`"
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PostStateIndexes {
    pub data: IndexSelector,
    pub gas: IndexSelector,
    pub value: IndexSelector,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PostState {
    pub indexes: PostStateIndexes,
    pub hash: web3::types::H256,
    pub logs: web3::types::H256,
}

#[cfg(test)]
mod tests {
    use super::IndexSelector;
    use super::PostState;

    #[test]
    fn single_integer_parses_to_a_one_element_set() {
        let selector: IndexSelector = serde_json::from_str("2").unwrap();
        let set = selector.to_set();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&2));
    }

    #[test]
    fn lists_flatten_and_collapse_duplicates() {
        let selector: IndexSelector = serde_json::from_str("[0, 2, 2, -1]").unwrap();
        let set = selector.to_set();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&0));
        assert!(set.contains(&2));
        assert!(set.contains(&-1));
    }

    #[test]
    fn rejects_non_integer_shapes() {
        assert!(serde_json::from_str::<IndexSelector>("\"0\"").is_err());
        assert!(serde_json::from_str::<IndexSelector>("{}").is_err());
        assert!(serde_json::from_str::<IndexSelector>("[0, \"1\"]").is_err());
    }

    #[test]
    fn parses_a_whole_expectation() {
        let post_state: PostState = serde_json::from_str(
            r#"{
                "hash": "0x17454a767e5f04461256f3812ffca930443c04a47d05ce3f38940c4a14b8c479",
                "logs": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
                "indexes": { "data": -1, "gas": [0, 1], "value": 0 }
            }"#,
        )
        .unwrap();
        assert!(post_state.indexes.data.to_set().contains(&-1));
        assert_eq!(post_state.indexes.gas.to_set().len(), 2);
    }
}
