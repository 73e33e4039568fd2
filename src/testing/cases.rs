//! Built-in test cases
//!
//! The case list is plain data. Adding a case here is all it takes to have
//! the runner exercise it; ids follow list order.

use serde_json::{json, Value};

/// A named JSON-RPC call sent once per run
#[derive(Debug, Clone)]
pub struct TestCase {
    /// Display name printed in the case header
    pub name: &'static str,
    /// JSON-RPC method name
    pub method: &'static str,
    /// Parameter object sent as `params`
    pub params: Value,
}

impl TestCase {
    fn new(name: &'static str, method: &'static str, params: Value) -> Self {
        Self {
            name,
            method,
            params,
        }
    }
}

/// The fixed sequence exercised against an LLM-as-a-judge agent
pub fn builtin_cases() -> Vec<TestCase> {
    vec![
        TestCase::new("Agent Discovery", "agent.discover", json!({})),
        TestCase::new(
            "High-Quality Response Evaluation",
            "evaluate_response",
            json!({
                "prompt": "Explain quantum computing",
                "response": "Quantum computing uses quantum mechanical phenomena like superposition and entanglement to perform calculations that would be impossible for classical computers. Unlike classical bits that are either 0 or 1, quantum bits (qubits) can exist in multiple states simultaneously, allowing for parallel processing.",
                "criteria": ["accuracy", "clarity", "technical_depth"]
            }),
        ),
        TestCase::new(
            "Low-Quality Response Evaluation",
            "evaluate_response",
            json!({
                "prompt": "What is the capital of France?",
                "response": "I think it might be London or maybe Berlin. Not sure though.",
                "criteria": ["accuracy", "confidence", "relevance"]
            }),
        ),
        TestCase::new(
            "Content Quality Scoring - Creative Writing",
            "score_quality",
            json!({
                "content": "The old lighthouse stood sentinel on the rocky cliff, its weathered stone walls bearing witness to countless storms. The beacon light, though dimmed by time, still cast its hopeful glow across the churning sea, guiding lost souls home.",
                "content_type": "creative_writing",
                "evaluation_dimensions": ["creativity", "imagery", "flow", "emotional_impact"]
            }),
        ),
        TestCase::new(
            "Content Quality Scoring - Technical Documentation",
            "score_quality",
            json!({
                "content": "To install the package, run: npm install my-package. Then import it in your code: const pkg = require('my-package');",
                "content_type": "technical_documentation",
                "evaluation_dimensions": ["clarity", "completeness", "accuracy", "usability"]
            }),
        ),
        TestCase::new(
            "Factual Accuracy Check - Scientific",
            "check_factual_accuracy",
            json!({
                "claim": "Water boils at 100 degrees Celsius at sea level under standard atmospheric pressure",
                "domain": "physics",
                "verification_level": "high"
            }),
        ),
        TestCase::new(
            "Factual Accuracy Check - Historical",
            "check_factual_accuracy",
            json!({
                "claim": "The American Civil War ended in 1865 with the surrender of General Robert E. Lee at Appomattox Court House",
                "domain": "history",
                "verification_level": "high"
            }),
        ),
        TestCase::new(
            "Relevance Assessment - On Topic",
            "assess_relevance",
            json!({
                "query": "How to make coffee?",
                "response": "To make coffee, grind beans, add to filter, pour hot water, and let it brew for 4 minutes.",
                "context": "cooking"
            }),
        ),
        TestCase::new(
            "Relevance Assessment - Off Topic",
            "assess_relevance",
            json!({
                "query": "What are the benefits of renewable energy?",
                "response": "I really love pizza, especially with pepperoni and extra cheese. My favorite pizza place is down the street from my house.",
                "context": "environmental_science"
            }),
        ),
        TestCase::new(
            "Response Comparison",
            "compare_responses",
            json!({
                "prompt": "Explain photosynthesis",
                "responses": [
                    "Photosynthesis is how plants make food using sunlight.",
                    "Photosynthesis is the process by which plants convert light energy into chemical energy, using carbon dioxide and water to produce glucose and oxygen. This occurs primarily in the chloroplasts of plant cells, specifically in structures called thylakoids where chlorophyll captures light energy."
                ],
                "comparison_criteria": ["accuracy", "detail", "scientific_rigor"]
            }),
        ),
        // Exercises the agent's input validation, not ours
        TestCase::new(
            "Error Handling - Invalid Input",
            "evaluate_response",
            json!({
                "prompt": "",
                "response": "",
                "criteria": []
            }),
        ),
    ]
}
