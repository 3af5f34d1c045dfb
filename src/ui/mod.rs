//! Screens. Each one is a view-model over a [`mvi::StateContainer`].

pub mod addtask;
pub mod addtasklist;
pub mod edittask;
pub mod edittasklist;
pub mod home;
pub mod mvi;
pub mod taskdetails;
