//! 条件评估性能基准测试
//!
//! 测试覆盖：
//! - 单条件评估
//! - AND 组合条件（不同条件数量）
//! - 嵌套条件树（不同深度）

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use labeling_engine::{
    Classifier, ComparisonOperator, Condition, ConditionGroup, ConditionNode, EvaluationContext,
};
use serde_json::json;
use std::hint::black_box;

/// 创建包含多字段的载荷
fn create_context(field_count: usize) -> EvaluationContext {
    let mut data = serde_json::Map::new();
    for i in 0..field_count {
        data.insert(format!("field_{}", i), json!(format!("value_{}", i)));
    }
    data.insert("CompanyName".to_string(), json!("Amazon"));
    data.insert("Price".to_string(), json!(2));
    EvaluationContext::new(serde_json::Value::Object(data))
}

/// 创建 AND 组合条件
fn create_and_node(conditions_count: usize) -> ConditionNode {
    let children: Vec<ConditionNode> = (0..conditions_count)
        .map(|i| {
            ConditionNode::Condition(Condition::new(
                format!("field_{}", i),
                ComparisonOperator::Eq,
                format!("value_{}", i),
            ))
        })
        .collect();

    ConditionNode::Group(ConditionGroup::and(children))
}

/// 创建交替 AND/OR 的嵌套树
fn create_nested_node(depth: usize, breadth: usize) -> ConditionNode {
    fn build(depth: usize, breadth: usize, level: usize) -> ConditionNode {
        if depth == 0 {
            ConditionNode::Condition(Condition::new(
                format!("field_{}", level),
                ComparisonOperator::Eq,
                format!("value_{}", level),
            ))
        } else {
            let children: Vec<ConditionNode> =
                (0..breadth).map(|i| build(depth - 1, breadth, i)).collect();
            let group = if depth % 2 == 0 {
                ConditionGroup::and(children)
            } else {
                ConditionGroup::or(children)
            };
            ConditionNode::Group(group)
        }
    }

    build(depth, breadth, 0)
}

/// 单条件评估基准
fn bench_single_condition(c: &mut Criterion) {
    let node = ConditionNode::Condition(Condition::new(
        "CompanyName",
        ComparisonOperator::Eq,
        "Amazon",
    ));
    let ctx = create_context(10);

    c.bench_function("single_condition", |b| {
        b.iter(|| {
            let matched = Classifier::evaluate_node(black_box(&ctx), black_box(&node));
            black_box(matched)
        })
    });
}

/// 数值比较评估基准
fn bench_numeric_condition(c: &mut Criterion) {
    let node = ConditionNode::Condition(Condition::new("Price", ComparisonOperator::Lt, "2.5"));
    let ctx = create_context(10);

    c.bench_function("numeric_condition", |b| {
        b.iter(|| {
            let matched = Classifier::evaluate_node(black_box(&ctx), black_box(&node));
            black_box(matched)
        })
    });
}

/// AND 组合条件基准（不同条件数量）
fn bench_and_conditions(c: &mut Criterion) {
    let mut group = c.benchmark_group("and_conditions");

    for conditions_count in [2, 5, 10, 20, 50].iter() {
        let node = create_and_node(*conditions_count);
        let ctx = create_context(*conditions_count);

        group.throughput(Throughput::Elements(*conditions_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(conditions_count),
            conditions_count,
            |b, _| {
                b.iter(|| {
                    let matched = Classifier::evaluate_node(black_box(&ctx), black_box(&node));
                    black_box(matched)
                })
            },
        );
    }

    group.finish();
}

/// 嵌套树评估基准（不同深度与宽度）
fn bench_nested_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_trees");

    let configs = [(2, 2), (3, 2), (4, 2), (2, 4), (3, 3)];

    for (depth, breadth) in configs.iter() {
        let node = create_nested_node(*depth, *breadth);
        let ctx = create_context(100);

        group.bench_with_input(
            BenchmarkId::new("depth_breadth", format!("{}x{}", depth, breadth)),
            &(depth, breadth),
            |b, _| {
                b.iter(|| {
                    let matched = Classifier::evaluate_node(black_box(&ctx), black_box(&node));
                    black_box(matched)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_condition,
    bench_numeric_condition,
    bench_and_conditions,
    bench_nested_trees,
);

criterion_main!(benches);
