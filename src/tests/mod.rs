#[cfg(test)]
mod test_type_chart;
