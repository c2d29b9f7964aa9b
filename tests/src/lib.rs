//! End-to-end scenarios driving a calculator session the way a front end does.

mod session;
