mod academy_manufactor;
mod chatterfang;
mod doublers;
mod full_table;
mod peregrin_took;
