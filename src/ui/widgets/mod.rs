pub mod nested_select;
