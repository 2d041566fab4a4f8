use ordo::{PropertyComparison, PropertyComparisonProvider};

#[derive(PropertyComparison)]
#[comparison(rename_all = "PascalCase")]
struct Person {
    name: String,
    age: i32,
    nickname: Option<String>,
}

fn main() {
    let mut people = vec![
        Person { name: "b".into(), age: 2, nickname: None },
        Person { name: "a".into(), age: 1, nickname: Some("x".into()) },
    ];
    if let Some(by_age) = Person::get_comparison("Age") {
        people.sort_by(by_age.as_fn());
    }
    assert_eq!(people[0].age, 1);
    assert_eq!(<Person as PropertyComparisonProvider>::properties().len(), 3);
    let _ = &people[0].name;
    let _ = &people[0].nickname;
}
