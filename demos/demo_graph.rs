use dijkstra_lab::{algo::ShortestPaths, graph::demo::demo_graph};

fn main() {
    let graph = demo_graph();

    for (node, position) in graph.positions() {
        println!("{node} at ({:.2}, {:.2})", position.x, position.y);
    }

    let shortest_paths = ShortestPaths::on(&graph).run("A".to_owned()).unwrap();

    for node in graph.nodes() {
        match shortest_paths.dist(node) {
            Some(distance) => println!("{node}: {distance}"),
            None => println!("{node}: unreachable"),
        }
    }

    let goal = "G".to_owned();
    let distance = shortest_paths[&goal];
    let path = shortest_paths.path_to(&goal).unwrap().join(" - ");

    println!("{distance} from A through {path}");
    // 9 from A through A - C - D - E - G
}
