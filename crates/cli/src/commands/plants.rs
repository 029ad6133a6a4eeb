//! `veggietools plants`: Print plant keys in table order.

use veggietools_knowledge::KnowledgeStore;

pub fn run() {
    let store = KnowledgeStore::builtin();
    for (key, record) in store.plants() {
        println!("{key:<28} {}", record.name);
    }
}
