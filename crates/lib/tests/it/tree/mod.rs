mod ops;
mod path;
mod search;
