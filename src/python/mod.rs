//! Python bindings for bang-cards.
//!
//! # Quick Start
//!
//! ```python
//! import bang_cards as bc
//!
//! class Beer(bc.Card):
//!     def use(self, player, target=None):
//!         player.life += 1
//!
//! beer = Beer("Beer", "Heal 1 life", "effect")
//! repr(beer)  # 'Beer (effect)'
//!
//! bc.Card("Bang!", "Deal 1 damage", "attack").use(me, you)  # NotImplementedError
//! ```

use pyo3::prelude::*;

mod py_card;

pub use py_card::*;

/// bang-cards: validated playing cards with an overridable `use` hook.
#[pymodule]
fn bang_cards(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    Ok(())
}
