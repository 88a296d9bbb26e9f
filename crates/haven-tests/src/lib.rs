#[cfg(test)]
mod support;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod overview_tests;
