//! Hand-authored demo scenes.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use rayt_math::{Color, Vec3};
use rayt_renderer::{
    Background, Camera, CheckerTexture, Dielectric, DiffuseLight, FlipNormals, HittableList,
    ImageTexture, Lambertian, Material, Metal, Rect, Scene, Sphere,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Ground plane and one diffuse sphere under a sky
    TwoSpheres,
    /// Diffuse, fuzzy metal and hollow glass spheres
    Materials,
    /// Two checker-textured spheres
    Checker,
    /// Cornell box lit by a ceiling panel
    Cornell,
    /// Image-textured globe, needs --texture
    Earth,
}

/// Build the named scene for an image of the given aspect ratio.
pub fn build(kind: SceneKind, aspect: f32, texture: Option<&Path>) -> Result<Scene> {
    let scene = match kind {
        SceneKind::TwoSpheres => two_spheres(aspect)?,
        SceneKind::Materials => materials(aspect)?,
        SceneKind::Checker => checker(aspect)?,
        SceneKind::Cornell => cornell(aspect)?,
        SceneKind::Earth => {
            let Some(path) = texture else {
                bail!("the earth scene needs an image passed with --texture");
            };
            earth(aspect, path)?
        }
    };
    log::debug!("Built scene {:?}", kind);
    Ok(scene)
}

fn lambertian(r: f32, g: f32, b: f32) -> Arc<dyn Material> {
    Arc::new(Lambertian::solid(Color::new(r, g, b)))
}

pub fn two_spheres(aspect: f32) -> Result<Scene> {
    let mut world = HittableList::new();
    world.add(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, lambertian(0.5, 0.5, 0.5))?);
    world.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, lambertian(0.5, 0.5, 0.5))?);

    let camera = Camera::look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 90.0, aspect)?;
    Ok(Scene::new(world, camera, Background::Sky))
}

pub fn materials(aspect: f32) -> Result<Scene> {
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5)?);

    let mut world = HittableList::new();
    world.add(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, lambertian(0.8, 0.8, 0.0))?);
    world.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, lambertian(0.1, 0.2, 0.5))?);
    world.add(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Arc::new(Metal::solid(Color::new(0.8, 0.6, 0.2), 0.3)),
    )?);
    // Hollow bubble: a glass shell around an inward-facing glass sphere
    world.add(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass.clone())?);
    world.add(FlipNormals::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.45, glass)?));

    let camera = Camera::look_at(
        Vec3::new(-2.0, 2.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::Y,
        40.0,
        aspect,
    )?;
    Ok(Scene::new(world, camera, Background::Sky))
}

pub fn checker(aspect: f32) -> Result<Scene> {
    let pattern = Arc::new(CheckerTexture::from_colors(
        Color::new(0.2, 0.3, 0.1),
        Color::new(0.9, 0.9, 0.9),
        10.0,
    ));
    let material: Arc<dyn Material> = Arc::new(Lambertian::new(pattern));

    let mut world = HittableList::new();
    world.add(Sphere::new(Vec3::new(0.0, -10.0, 0.0), 10.0, material.clone())?);
    world.add(Sphere::new(Vec3::new(0.0, 10.0, 0.0), 10.0, material)?);

    let camera = Camera::look_at(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y, 20.0, aspect)?;
    Ok(Scene::new(world, camera, Background::Sky))
}

pub fn cornell(aspect: f32) -> Result<Scene> {
    let red = lambertian(0.65, 0.05, 0.05);
    let white = lambertian(0.73, 0.73, 0.73);
    let green = lambertian(0.12, 0.45, 0.15);
    let light: Arc<dyn Material> = Arc::new(DiffuseLight::solid(Color::splat(15.0)));

    let mut world = HittableList::new();
    world.add(FlipNormals::new(Rect::yz((0.0, 555.0), (0.0, 555.0), 555.0, green)?));
    world.add(Rect::yz((0.0, 555.0), (0.0, 555.0), 0.0, red)?);
    world.add(Rect::xz((213.0, 343.0), (227.0, 332.0), 554.0, light)?);
    world.add(FlipNormals::new(Rect::xz((0.0, 555.0), (0.0, 555.0), 555.0, white.clone())?));
    world.add(Rect::xz((0.0, 555.0), (0.0, 555.0), 0.0, white.clone())?);
    world.add(FlipNormals::new(Rect::xy((0.0, 555.0), (0.0, 555.0), 555.0, white)?));

    world.add(Sphere::new(
        Vec3::new(190.0, 90.0, 190.0),
        90.0,
        Arc::new(Dielectric::new(1.5)?),
    )?);
    world.add(Sphere::new(
        Vec3::new(370.0, 120.0, 370.0),
        120.0,
        Arc::new(Metal::solid(Color::new(0.8, 0.85, 0.88), 0.05)),
    )?);

    let camera = Camera::look_at(
        Vec3::new(278.0, 278.0, -800.0),
        Vec3::new(278.0, 278.0, 0.0),
        Vec3::Y,
        40.0,
        aspect,
    )?;
    Ok(Scene::new(world, camera, Background::Solid(Color::ZERO)))
}

pub fn earth(aspect: f32, texture: &Path) -> Result<Scene> {
    let surface = ImageTexture::open(texture)
        .with_context(|| format!("failed to load earth texture {}", texture.display()))?;
    log::info!(
        "Loaded texture {} ({}x{})",
        texture.display(),
        surface.width(),
        surface.height()
    );

    let mut world = HittableList::new();
    world.add(Sphere::new(Vec3::ZERO, 2.0, Arc::new(Lambertian::new(Arc::new(surface))))?);

    let camera = Camera::look_at(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y, 20.0, aspect)?;
    Ok(Scene::new(world, camera, Background::Sky))
}
