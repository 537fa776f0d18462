use uuid::Uuid;

use super::available_pool;
use crate::net::types::Surveyor;

fn surveyor(name: &str) -> Surveyor {
    Surveyor { id: Uuid::new_v4(), name: name.to_owned() }
}

#[test]
fn available_pool_excludes_assigned() {
    let a = surveyor("Ana");
    let b = surveyor("Budi");
    let c = surveyor("Citra");
    let assigned = vec![b.clone()];

    let pool = available_pool(vec![a.clone(), b, c.clone()], &assigned);

    assert_eq!(pool, vec![a, c]);
}

#[test]
fn available_pool_with_nobody_assigned_is_everyone() {
    let all = vec![surveyor("Ana"), surveyor("Budi")];
    assert_eq!(available_pool(all.clone(), &[]), all);
}

#[test]
fn available_pool_can_be_empty() {
    let a = surveyor("Ana");
    assert!(available_pool(vec![a.clone()], &[a]).is_empty());
}
