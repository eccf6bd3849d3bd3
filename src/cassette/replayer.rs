//! Serves recorded port outputs back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays a lookup log, one queue per port/method pair.
///
/// Each call must pass the same argument that was recorded; a mismatch
/// means the code under replay diverged from the recorded run.
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Builds a replayer over every interaction in `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Number of interactions not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Returns the recorded output of the next `port::method` call.
    ///
    /// # Panics
    ///
    /// Panics if no call to `port::method` is left in the log, or if
    /// `input` differs from the recorded argument.
    pub fn next_output(
        &mut self,
        port: &str,
        method: &str,
        input: &serde_json::Value,
    ) -> serde_json::Value {
        let key = (port.to_string(), method.to_string());
        let Some(interaction) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) else {
            let mut left: Vec<String> = self
                .queues
                .iter()
                .filter(|(_, queue)| !queue.is_empty())
                .map(|((p, m), queue)| format!("{p}::{m} x{}", queue.len()))
                .collect();
            left.sort();
            panic!(
                "Lookup log exhausted: no recorded call left for {port}::{method}. \
                 Remaining: [{}]",
                left.join(", ")
            );
        };

        assert_eq!(
            &interaction.input, input,
            "Lookup log mismatch at seq={}: {port}::{method} was recorded with a different argument",
            interaction.seq
        );
        interaction.output
    }
}
