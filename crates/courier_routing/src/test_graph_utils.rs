#[cfg(test)]
pub mod test_graph {
    use crate::{graph::Graph, graph_edge::GraphEdge};

    #[derive(Clone, Copy, Debug)]
    pub enum RomaniaGraphCity {
        Arad,
        Bucharest,
        Craiova,
        Dobreta,
        Eforie,
        Fagaras,
        Giurgiu,
        Hirsova,
        Iasi,
        Lugoj,
        Mehadia,
        Neamt,
        Oradea,
        Pitesti,
        RimnicuVilcea,
        Sibiu,
        Timisoara,
        Urziceni,
        Vaslui,
        Zerind,
    }

    impl RomaniaGraphCity {
        pub fn name(&self) -> &'static str {
            match self {
                RomaniaGraphCity::Arad => "Arad",
                RomaniaGraphCity::Bucharest => "Bucharest",
                RomaniaGraphCity::Craiova => "Craiova",
                RomaniaGraphCity::Dobreta => "Dobreta",
                RomaniaGraphCity::Eforie => "Eforie",
                RomaniaGraphCity::Fagaras => "Fagaras",
                RomaniaGraphCity::Giurgiu => "Giurgiu",
                RomaniaGraphCity::Hirsova => "Hirsova",
                RomaniaGraphCity::Iasi => "Iasi",
                RomaniaGraphCity::Lugoj => "Lugoj",
                RomaniaGraphCity::Mehadia => "Mehadia",
                RomaniaGraphCity::Neamt => "Neamt",
                RomaniaGraphCity::Oradea => "Oradea",
                RomaniaGraphCity::Pitesti => "Pitesti",
                RomaniaGraphCity::RimnicuVilcea => "RimnicuVilcea",
                RomaniaGraphCity::Sibiu => "Sibiu",
                RomaniaGraphCity::Timisoara => "Timisoara",
                RomaniaGraphCity::Urziceni => "Urziceni",
                RomaniaGraphCity::Vaslui => "Vaslui",
                RomaniaGraphCity::Zerind => "Zerind",
            }
        }
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn get_romania_graph_roads() -> Vec<(RomaniaGraphCity, RomaniaGraphCity, i64)> {
        use RomaniaGraphCity::*;

        vec![
            (Oradea, Zerind, 71),
            (Oradea, Sibiu, 151),
            (Zerind, Arad, 75),
            (Arad, Sibiu, 140),
            (Arad, Timisoara, 118),
            (Timisoara, Lugoj, 111),
            (Lugoj, Mehadia, 70),
            (Mehadia, Dobreta, 75),
            (Dobreta, Craiova, 120),
            (Craiova, RimnicuVilcea, 146),
            (Craiova, Pitesti, 138),
            (RimnicuVilcea, Pitesti, 97),
            (RimnicuVilcea, Sibiu, 80),
            (Sibiu, Fagaras, 99),
            (Fagaras, Bucharest, 211),
            (Pitesti, Bucharest, 101),
            (Bucharest, Giurgiu, 90),
            (Bucharest, Urziceni, 85),
            (Urziceni, Hirsova, 98),
            (Hirsova, Eforie, 86),
            (Urziceni, Vaslui, 142),
            (Vaslui, Iasi, 92),
            (Iasi, Neamt, 87),
        ]
    }

    /// Roads are two-way, each one becomes a pair of directed edges.
    pub fn create_romania_graph() -> Graph {
        let edges = get_romania_graph_roads()
            .into_iter()
            .flat_map(|(start, end, distance)| {
                [
                    GraphEdge::new(start.name(), end.name(), distance),
                    GraphEdge::new(end.name(), start.name(), distance),
                ]
            })
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        Graph::new(edges)
    }

    pub fn create_graph(edges: &[(&str, &str, i64)]) -> Graph {
        Graph::from_triples(edges.iter().copied()).unwrap()
    }
}
