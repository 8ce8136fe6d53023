//! Card bindings for Python.
//!
//! `Card` is built in two steps so Python subclasses can call
//! `super().__init__(name, description, card_type)` from their own
//! `__init__`. `__new__` validates right away when it receives exactly the
//! three card arguments; otherwise it leaves the card unset until
//! `__init__` runs.

use pyo3::exceptions::{PyNotImplementedError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};

use crate::cards::{Card, CardBehavior, CardError};

const CARD_ARGS: [&str; 3] = ["name", "description", "card_type"];

fn to_py_err(err: CardError) -> PyErr {
    match err {
        CardError::Unsupported { .. } => PyNotImplementedError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Validate Python arguments. Checks run in order: name, description, card type.
fn build_card(
    name: &Bound<'_, PyAny>,
    description: &Bound<'_, PyAny>,
    card_type: &Bound<'_, PyAny>,
) -> PyResult<Card> {
    let name: String = name
        .extract()
        .map_err(|_| to_py_err(CardError::InvalidName))?;
    if name.trim().is_empty() {
        return Err(to_py_err(CardError::InvalidName));
    }
    let description: String = description
        .extract()
        .map_err(|_| to_py_err(CardError::InvalidDescription))?;
    let card_type: String = card_type
        .extract()
        .map_err(|_| to_py_err(CardError::InvalidCardType(card_type.to_string())))?;

    Card::parse(name, description, &card_type).map_err(to_py_err)
}

/// Bind `(name, description, card_type)` from positional and keyword
/// arguments. `None` when the call does not have exactly that shape.
fn card_arguments<'py>(
    args: &Bound<'py, PyTuple>,
    kwargs: Option<&Bound<'py, PyDict>>,
) -> PyResult<Option<Vec<Bound<'py, PyAny>>>> {
    let keyword_count = kwargs.map_or(0, |k| k.len());
    if args.len() + keyword_count != CARD_ARGS.len() {
        return Ok(None);
    }

    let mut values = Vec::with_capacity(CARD_ARGS.len());
    for (index, field) in CARD_ARGS.iter().enumerate() {
        if index < args.len() {
            values.push(args.get_item(index)?);
            continue;
        }
        let Some(kwargs) = kwargs else {
            return Ok(None);
        };
        match kwargs.get_item(*field)? {
            Some(value) => values.push(value),
            None => return Ok(None),
        }
    }
    Ok(Some(values))
}

/// Python wrapper for Card.
///
/// Subclass it from Python and override `use` to give a card behavior.
#[pyclass(subclass, name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard {
    card: Option<Card>,
}

impl PyCard {
    fn card(&self) -> PyResult<&Card> {
        self.card
            .as_ref()
            .ok_or_else(|| PyRuntimeError::new_err("Card.__init__() was not called"))
    }

    fn card_mut(&mut self) -> PyResult<&mut Card> {
        self.card
            .as_mut()
            .ok_or_else(|| PyRuntimeError::new_err("Card.__init__() was not called"))
    }
}

#[pymethods]
impl PyCard {
    /// Allocate a card. Validates when given exactly the card arguments.
    #[new]
    #[pyo3(signature = (*args, **kwargs))]
    fn new(args: &Bound<'_, PyTuple>, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let card = match card_arguments(args, kwargs)? {
            Some(values) => Some(build_card(&values[0], &values[1], &values[2])?),
            None => None,
        };
        Ok(Self { card })
    }

    /// Set the card fields, raising `ValueError` on invalid arguments.
    #[pyo3(signature = (name, description, card_type))]
    fn __init__(
        &mut self,
        name: &Bound<'_, PyAny>,
        description: &Bound<'_, PyAny>,
        card_type: &Bound<'_, PyAny>,
    ) -> PyResult<()> {
        self.card = Some(build_card(name, description, card_type)?);
        Ok(())
    }

    #[getter]
    fn name(&self) -> PyResult<String> {
        Ok(self.card()?.name().to_string())
    }

    #[getter]
    fn description(&self) -> PyResult<String> {
        Ok(self.card()?.description().to_string())
    }

    #[getter]
    fn card_type(&self) -> PyResult<&'static str> {
        Ok(self.card()?.card_type().as_str())
    }

    #[getter]
    fn is_playable(&self) -> PyResult<bool> {
        Ok(self.card()?.is_playable())
    }

    #[setter]
    fn set_is_playable(&mut self, playable: bool) -> PyResult<()> {
        self.card_mut()?.set_playable(playable);
        Ok(())
    }

    /// Use the card. Always raises `NotImplementedError` on the base class.
    #[pyo3(name = "use", signature = (player, target = None))]
    fn use_card(&self, mut player: PyObject, mut target: Option<PyObject>) -> PyResult<()> {
        self.card()?
            .use_card(&mut player, target.as_mut())
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(self.card()?.to_string())
    }

    fn __str__(&self) -> PyResult<String> {
        Ok(self.card()?.to_string())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.card == other.card
    }
}
