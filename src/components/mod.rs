pub mod force_graph;
pub mod metric_form;
pub mod topology_panel;
