//! Shared fixtures for integration tests.
//!
//! `fixture_todos()` builds a deterministic 300-todo collection: six owners
//! in rotation, four categories, 143 complete and 157 incomplete.

#![allow(dead_code)]

use std::sync::Arc;

use tododb::api::TodoApi;
use tododb::store::{Todo, TodoStore};

pub const FIXTURE_SIZE: usize = 300;
pub const COMPLETE_COUNT: usize = 143;

pub const OWNERS: [&str; 6] = ["Blanche", "Fry", "Dawn", "Roberta", "Barry", "Workman"];
pub const CATEGORIES: [&str; 4] = ["software design", "video games", "homework", "groceries"];

const BODIES: [&str; 10] = [
    "Ipsum esse est ullamco magna tempor anim laborum non officia deserunt veniam commodo.",
    "Incididunt enim ea sit qui esse magna eu. Nisi sunt exercitation est Lorem consectetur.",
    "Aliqua esse aliqua veniam id nisi ea. Ullamco Lorem ex aliqua aliquip cupidatat.",
    "Consequat nostrud nisi non enim eiusmod officia ad reprehenderit velit.",
    "Sunt esse dolore ad magna irure excepteur ullamco eiusmod eiusmod.",
    "Velit id ad do nostrud culpa aliquip cillum eu occaecat sunt pariatur.",
    "In sunt ex non tempor cillum commodo amet incididunt anim qui commodo quis.",
    "Nostrud ullamco labore exercitation magna. Excepteur aute aliqua veniam.",
    "Laboris nisi ipsum commodo sint. Tempor qui ea est minim irure amet cupidatat.",
    "Deserunt in tempor est id consectetur cupidatat. Deserunt officia aliquip.",
];

/// Id of the fixture todo at `index`
pub fn fixture_id(index: usize) -> String {
    format!("58895985{:016x}", 0xa22c_04e7_u64 + (index as u64) * 104_729)
}

/// The 300-todo fixture in load order
pub fn fixture_todos() -> Vec<Todo> {
    (0..FIXTURE_SIZE)
        .map(|i| {
            Todo::new(
                fixture_id(i),
                OWNERS[i % OWNERS.len()],
                // 37 is coprime with 300, so this picks exactly 143 indices
                (i * 37) % FIXTURE_SIZE < COMPLETE_COUNT,
                BODIES[(i * 7 + i / 3) % BODIES.len()],
                CATEGORIES[(i / 2 + i * 3) % CATEGORIES.len()],
            )
        })
        .collect()
}

pub fn fixture_store() -> TodoStore {
    TodoStore::from_todos(fixture_todos()).unwrap()
}

pub fn fixture_api() -> Arc<TodoApi> {
    Arc::new(TodoApi::new(Arc::new(fixture_store())))
}
