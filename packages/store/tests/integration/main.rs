mod exercise;
mod migration;
