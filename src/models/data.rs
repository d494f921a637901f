//! The authored knowledge graph: roots of AI amnesia.
//!
//! Layout is hand-placed: roots sit below the origin, the trunk at the
//! origin, branches above it and leaves at the top.

use super::{Category, NodeRecord};

/// Every node of the graph, in tree order.
pub static NODES: &[NodeRecord] = &[
    // Roots
    NodeRecord {
        id: "R1",
        category: Category::Root,
        label: "No Hebbian Plasticity",
        sub_label: Some("Frozen Weights"),
        description: "Weights are frozen post-training; the model cannot learn from its interactions in real-time like a biological brain.",
        position: [-4.0, -3.0, 2.0],
        connections: &["T1"],
    },
    NodeRecord {
        id: "R2",
        category: Category::Root,
        label: "Finite Resources",
        sub_label: Some("O(N^2) Complexity"),
        description: "Self-Attention complexity scales quadratically, strictly limiting the amount of historical context the model can process.",
        position: [-2.0, -3.5, -2.0],
        connections: &["T1"],
    },
    NodeRecord {
        id: "R3",
        category: Category::Root,
        label: "Markovian Bias",
        sub_label: Some("Local Optimization"),
        description: "Optimization prioritizes local statistical dependencies (predicting the next token) rather than long-term planning.",
        position: [0.0, -4.0, 3.0],
        connections: &["T1"],
    },
    NodeRecord {
        id: "R4",
        category: Category::Root,
        label: "Monolithic Rep",
        sub_label: Some("Entangled Knowledge"),
        description: "Inability to cleanly disentangle Epistemic knowledge (facts) from Procedural knowledge (reasoning/logic).",
        position: [2.0, -3.5, -2.0],
        connections: &["T1"],
    },
    NodeRecord {
        id: "R5",
        category: Category::Root,
        label: "Loss of Semantics",
        sub_label: Some("Vector Compression"),
        description: "Vector compression and cosine similarity strip away critical causal and temporal relationships in data.",
        position: [4.0, -3.0, 2.0],
        connections: &["T1"],
    },
    // Trunk
    NodeRecord {
        id: "T1",
        category: Category::Trunk,
        label: "THE CORE PROBLEM",
        sub_label: Some("Systemic Amnesia"),
        description: "The inability to maintain a coherent, persistent state across disjoint interaction episodes. The system resets every time.",
        position: [0.0, 0.0, 0.0],
        connections: &["B1", "B2", "B3", "B4", "B5"],
    },
    // Branches
    NodeRecord {
        id: "B1",
        category: Category::Branch,
        label: "Hallucination",
        sub_label: Some("Confabulation"),
        description: "Failure of source monitoring due to probabilistic filling of voids. The model invents plausible-sounding untruths.",
        position: [-3.0, 3.0, 2.0],
        connections: &["L_OPP_1", "L_GAP_1"],
    },
    NodeRecord {
        id: "B2",
        category: Category::Branch,
        label: "\"Goldfish\" Effect",
        sub_label: Some("Context Loss"),
        description: "Catastrophic forgetting leading to an inability to maintain global coherence over long conversations.",
        position: [-1.5, 4.0, -2.0],
        connections: &["L_OPP_1", "L_GAP_2"],
    },
    NodeRecord {
        id: "B3",
        category: Category::Branch,
        label: "No Personalization",
        sub_label: Some("No Theory of Mind"),
        description: "Absence of specific user modeling due to invariant weights across millions of user instances.",
        position: [0.0, 5.0, 2.0],
        connections: &["L_OPP_2", "L_GAP_3"],
    },
    NodeRecord {
        id: "B4",
        category: Category::Branch,
        label: "Reasoning Decay",
        sub_label: Some("Lost in Middle"),
        description: "Dilution of attention scores causes the model to lose track of key details in the middle of long contexts.",
        position: [1.5, 4.0, -2.0],
        connections: &["L_OPP_3"],
    },
    NodeRecord {
        id: "B5",
        category: Category::Branch,
        label: "Inefficient Scaling",
        sub_label: Some("Redundant Compute"),
        description: "Redundant re-computation of identical attention matrices creates prohibitive cost and latency.",
        position: [3.0, 3.0, 2.0],
        connections: &["L_OPP_2"],
    },
    // Leaves: gaps
    NodeRecord {
        id: "L_GAP_1",
        category: Category::LeafGap,
        label: "RAG Brittleness",
        sub_label: Some("Search Failure"),
        description: "Semantic search often fails on nuanced context, retrieving irrelevant or missing crucial information.",
        position: [-5.0, 6.0, 3.0],
        connections: &[],
    },
    NodeRecord {
        id: "L_GAP_2",
        category: Category::LeafGap,
        label: "Context Limits",
        sub_label: Some("Hard Boundaries"),
        description: "Even with larger windows, accuracy degrades and costs skyrocket linearly or quadratically.",
        position: [-3.0, 7.0, -3.0],
        connections: &[],
    },
    NodeRecord {
        id: "L_GAP_3",
        category: Category::LeafGap,
        label: "Vector Limits",
        sub_label: Some("Static Snapshots"),
        description: "Vector DBs provide static snapshots of data, failing to capture evolving understanding or relationships.",
        position: [0.0, 7.5, 4.0],
        connections: &[],
    },
    // Leaves: opportunities
    NodeRecord {
        id: "L_OPP_1",
        category: Category::LeafOpportunity,
        label: "Episodic Memory",
        sub_label: Some("Time Distinction"),
        description: "Systems that can distinguish chronological events and maintain a history log separate from weights.",
        position: [-2.0, 8.0, 1.0],
        connections: &[],
    },
    NodeRecord {
        id: "L_OPP_2",
        category: Category::LeafOpportunity,
        label: "Parametric Updates",
        sub_label: Some("LoRA / Adapters"),
        description: "Targeted learning via lightweight adapters allows for \"learning\" without full model retraining.",
        position: [2.0, 8.0, -1.0],
        connections: &[],
    },
    NodeRecord {
        id: "L_OPP_3",
        category: Category::LeafOpportunity,
        label: "Cognitive Architecture",
        sub_label: Some("RAM vs Disk"),
        description: "Separating Working Memory (RAM) from Long-Term storage (Disk) for more human-like information processing.",
        position: [4.0, 7.0, 3.0],
        connections: &[],
    },
];
