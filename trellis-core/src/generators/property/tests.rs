//! Property runners for the topology constructors.

use proptest::prelude::*;

use super::laws::{
    check_directed_laws, check_expected_counts, check_family_degrees, check_undirected_laws,
};
use super::strategies::{DirectedCase, UndirectedCase, directed_case, undirected_case};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn undirected_families_satisfy_the_general_laws(case in undirected_case()) {
        let graph = case.build();
        check_undirected_laws(&graph)?;
        check_expected_counts(&case, &graph)?;
        check_family_degrees(&case, &graph)?;
    }

    #[test]
    fn directed_families_satisfy_the_general_laws(case in directed_case()) {
        let graph = case.build();
        check_directed_laws(&graph)?;
    }
}

#[rstest::rstest]
#[case::complete(UndirectedCase::Complete(9))]
#[case::bipartite(UndirectedCase::CompleteBipartite(4, 7))]
#[case::star(UndirectedCase::Star(12))]
#[case::path(UndirectedCase::Path(12))]
#[case::cycle(UndirectedCase::Cycle(12))]
#[case::wheel(UndirectedCase::Wheel(12))]
#[case::binary_tree(UndirectedCase::BinaryTree(4))]
#[case::clique_ring(UndirectedCase::CliqueRing(4, 5))]
#[case::grid(UndirectedCase::Grid(vec![3, 4], false))]
#[case::torus(UndirectedCase::Grid(vec![3, 4], true))]
#[case::double_tree(UndirectedCase::DoubleBinaryTree(4))]
#[case::roach(UndirectedCase::Roach(5))]
fn representative_cases_satisfy_every_law(#[case] case: UndirectedCase) {
    let graph = case.build();
    check_undirected_laws(&graph).expect("general laws hold");
    check_expected_counts(&case, &graph).expect("counts match the closed forms");
    check_family_degrees(&case, &graph).expect("degree laws hold");
}

#[rstest::rstest]
#[case::complete(DirectedCase::Complete(9))]
#[case::star(DirectedCase::Star(12))]
#[case::path(DirectedCase::Path(12))]
#[case::cycle(DirectedCase::Cycle(12))]
#[case::order_one_ring(DirectedCase::Cycle(1))]
#[case::wheel(DirectedCase::Wheel(12))]
fn representative_directed_cases_mirror_cleanly(#[case] case: DirectedCase) {
    let graph = case.build();
    check_directed_laws(&graph).expect("directed laws hold");
}
