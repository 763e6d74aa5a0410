mod guards;
mod sequences;
mod tasks;
mod tuples;
