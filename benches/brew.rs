use criterion::{black_box, criterion_group, criterion_main, Criterion};

use potion_brew::core::{Element, EngineConfig, PotionStats};
use potion_brew::effects::{EffectCatalog, EffectResolver};
use potion_brew::ingredients::{Ingredient, IngredientId, IngredientRegistry, Selection};

fn bench_brew(c: &mut Criterion) {
    let catalog = EffectCatalog::prototype().expect("prototype catalog");
    let resolver = EffectResolver::new(&catalog, EngineConfig::default()).expect("resolver");
    let registry = IngredientRegistry::from_ingredients([
        Ingredient::new(IngredientId::new(1), "Ember").with_stat(Element::Fire, 25.0, 1.0),
        Ingredient::new(IngredientId::new(2), "Kelp").with_stat(Element::Water, 21.0, 1.0),
        Ingredient::new(IngredientId::new(3), "Bellows")
            .with_stat(Element::Fire, 10.0, 2.0)
            .with_stat(Element::Water, 0.0, 0.5),
    ])
    .expect("registry");

    let selection: Selection = [1, 2, 3, 1, 2, 1].into_iter().map(IngredientId::new).collect();

    c.bench_function("brew_six_ingredients", |b| {
        b.iter(|| resolver.brew(black_box(&selection), &registry))
    });

    let mut stats = PotionStats::zero();
    stats[Element::Fire] = 85.0;
    stats[Element::Water] = 42.0;

    c.bench_function("resolve_stats", |b| {
        b.iter(|| resolver.resolve(black_box(&stats), &selection))
    });
}

criterion_group!(benches, bench_brew);
criterion_main!(benches);
