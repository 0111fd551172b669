mod integration;
mod randomness;
