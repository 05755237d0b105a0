//! Decision-forest inference over the trained classifier artifact.
//!
//! The artifact is read-only here: trees were fitted upstream and this
//! module only walks them. Inference is deterministic for a given artifact
//! and feature row (majority vote, ties to the lowest class id).

use crate::error::ModelError;
use crate::features::{FeatureRow, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Binary split: go `left` when `row[feature] <= threshold`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

/// One fitted tree, nodes indexed into a flat arena with the root at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    fn predict(&self, row: &FeatureRow) -> Result<usize, ModelError> {
        let mut idx = 0;
        // A well-formed tree terminates within nodes.len() hops.
        for _ in 0..=self.nodes.len() {
            let node = self.nodes.get(idx).ok_or_else(|| {
                ModelError::MalformedClassifier(format!("node index {idx} out of range"))
            })?;
            match node {
                Node::Leaf { class } => return Ok(*class),
                Node::Split { feature, threshold, left, right } => {
                    let x = row.get(*feature).ok_or_else(|| {
                        ModelError::MalformedClassifier(format!(
                            "split references feature {feature}, expected < {FEATURE_COUNT}"
                        ))
                    })?;
                    idx = if *x <= *threshold { *left } else { *right };
                }
            }
        }
        Err(ModelError::MalformedClassifier(
            "tree walk did not reach a leaf".to_string(),
        ))
    }
}

/// The trained classifier artifact: an ensemble of trees voting over a
/// fixed class space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classifier {
    trees: Vec<DecisionTree>,
    n_classes: usize,
}

impl Classifier {
    pub fn new(trees: Vec<DecisionTree>, n_classes: usize) -> Self {
        Self { trees, n_classes }
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Classify one feature row, returning the winning class id.
    pub fn predict(&self, row: &FeatureRow) -> Result<usize, ModelError> {
        if self.trees.is_empty() || self.n_classes == 0 {
            return Err(ModelError::MalformedClassifier(
                "classifier has no trees or no classes".to_string(),
            ));
        }

        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            let class = tree.predict(row)?;
            let slot = votes.get_mut(class).ok_or_else(|| {
                ModelError::MalformedClassifier(format!(
                    "leaf class {class} out of range, expected < {}",
                    self.n_classes
                ))
            })?;
            *slot += 1;
        }

        // First maximum wins, so ties break toward the lowest class id.
        let mut best = 0;
        for (class, &count) in votes.iter().enumerate() {
            if count > votes[best] {
                best = class;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stump: class 0 when Days_Left <= 1.5, class 2 otherwise.
    fn days_left_stump() -> DecisionTree {
        DecisionTree::new(vec![
            Node::Split { feature: 0, threshold: 1.5, left: 1, right: 2 },
            Node::Leaf { class: 0 },
            Node::Leaf { class: 2 },
        ])
    }

    fn row(days_left: f64) -> FeatureRow {
        [days_left, 0.0, 3.0, 1020.0, 4.0, 0.8, 1.0]
    }

    #[test]
    fn single_tree_routes_on_threshold() {
        let c = Classifier::new(vec![days_left_stump()], 3);
        assert_eq!(c.predict(&row(1.0)).unwrap(), 0);
        assert_eq!(c.predict(&row(5.0)).unwrap(), 2);
    }

    #[test]
    fn majority_vote_across_trees() {
        let always = |class| DecisionTree::new(vec![Node::Leaf { class }]);
        let c = Classifier::new(vec![always(1), always(1), always(2)], 3);
        assert_eq!(c.predict(&row(0.0)).unwrap(), 1);
    }

    #[test]
    fn ties_break_toward_the_lowest_class_id() {
        let always = |class| DecisionTree::new(vec![Node::Leaf { class }]);
        let c = Classifier::new(vec![always(2), always(0)], 3);
        assert_eq!(c.predict(&row(0.0)).unwrap(), 0);
    }

    #[test]
    fn prediction_is_deterministic() {
        let c = Classifier::new(vec![days_left_stump()], 3);
        let r = row(1.0);
        assert_eq!(c.predict(&r).unwrap(), c.predict(&r).unwrap());
    }

    #[test]
    fn out_of_range_node_reference_is_malformed() {
        let broken = DecisionTree::new(vec![Node::Split {
            feature: 0,
            threshold: 1.0,
            left: 99,
            right: 99,
        }]);
        let c = Classifier::new(vec![broken], 3);
        assert!(matches!(
            c.predict(&row(0.0)).unwrap_err(),
            ModelError::MalformedClassifier(_)
        ));
    }

    #[test]
    fn out_of_range_leaf_class_is_malformed() {
        let c = Classifier::new(vec![DecisionTree::new(vec![Node::Leaf { class: 7 }])], 3);
        assert!(matches!(
            c.predict(&row(0.0)).unwrap_err(),
            ModelError::MalformedClassifier(_)
        ));
    }

    #[test]
    fn empty_classifier_is_rejected() {
        let c = Classifier::new(vec![], 3);
        assert!(c.predict(&row(0.0)).is_err());
    }
}
